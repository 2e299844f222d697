//! qbasis Experiment Runner
//!
//! Groups labeled circuit programs into titled experiments, samples them for a
//! shared shot count and produces [`ExperimentReport`]s for rendering.
//!
//! # Example
//!
//! ```rust
//! use qbasis_ir::{build_minus_state, build_plus_state};
//! use qbasis_runner::ExperimentRunner;
//!
//! let circuits = vec![
//!     ("|+>".to_string(), build_plus_state()),
//!     ("|->".to_string(), build_minus_state()),
//! ];
//! let report = ExperimentRunner::with_seed(1)
//!     .run_experiment("Medicion en Z", &circuits, 1024)
//!     .unwrap();
//!
//! assert_eq!(report.entries.len(), 2);
//! assert_eq!(report.entries[0].counts.total_shots(), 1024);
//! ```

pub mod config;
pub mod error;
pub mod exercises;
pub mod report;
pub mod runner;

pub use config::{CircuitSpec, DEFAULT_SHOTS, ExperimentSpec, SuiteConfig};
pub use error::{RunnerError, RunnerResult};
pub use report::{ExperimentReport, ReportEntry};
pub use runner::ExperimentRunner;
