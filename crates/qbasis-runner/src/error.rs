//! Error types for the runner crate.

use thiserror::Error;

/// Errors that abort an experiment or a suite.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunnerError {
    /// Sampling failed.
    #[error("Simulation error: {0}")]
    Sim(#[from] qbasis_adapter_sim::SimError),

    /// Invalid IR value.
    #[error("IR error: {0}")]
    Ir(#[from] qbasis_ir::IrError),

    /// Suite configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A sampling task panicked or was cancelled.
    #[error("Sampling task failed: {0}")]
    Join(String),
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;
