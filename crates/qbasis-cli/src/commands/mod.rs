//! CLI command implementations.

pub mod common;
pub mod exercises;
pub mod run;
pub mod suite;
pub mod version;
