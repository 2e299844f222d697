//! Error types for the simulator.

use thiserror::Error;

/// Errors produced while simulating or sampling a program.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum SimError {
    /// Shot count must be at least 1.
    #[error("Invalid shot count: {0} (must be at least 1)")]
    InvalidShotCount(i64),

    /// State normalisation broke down; indicates a gate-library defect.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
