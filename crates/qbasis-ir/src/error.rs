//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur when parsing IR values from text.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrError {
    /// Outcome label is neither "0" nor "1".
    #[error("Invalid outcome label '{0}' (expected \"0\" or \"1\")")]
    InvalidOutcome(String),

    /// Measurement basis name not recognised.
    #[error("Unknown measurement basis '{0}' (expected z, x or y)")]
    UnknownBasis(String),

    /// Named preparation state not recognised.
    #[error("Unknown state '{0}' (expected plus or minus)")]
    UnknownState(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
