//! Error types for the file checks.

use thiserror::Error;

/// Result type alias for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors that stop a check before it can report a verdict.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error(transparent)]
    Core(#[from] hookkit_core::CoreError),
}
