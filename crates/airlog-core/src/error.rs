//! Core domain errors.

use thiserror::Error;

/// Core domain errors for airlog.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A marker line carried a timestamp that could not be parsed.
    #[error("Invalid timestamp in line: {line}")]
    InvalidTimestamp { line: String },

    /// The log has no timestamped marker line.
    #[error("Missing timestamp line: {0}")]
    MissingTimestamp(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
