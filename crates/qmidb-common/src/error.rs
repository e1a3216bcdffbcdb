//! Error types for qmidb-common.

use thiserror::Error;

/// Common error type for qmidb operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required column was missing from the line.
    #[error("missing column {column}: line has only {available} columns")]
    MissingColumn { column: usize, available: usize },

    /// A column that should hold an integer could not be parsed.
    #[error("invalid number in column {column}: {value:?}")]
    InvalidNumber { column: usize, value: String },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
