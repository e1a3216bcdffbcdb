//! Error types for dictionary loading and assembly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when working with the data dictionary.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A table file could not be opened or read.
    #[error("failed to read table {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An enum entry refers to an enum that was never declared.
    #[error("enum entry {enum_id}.{value} has no owning enum")]
    MissingOwner { enum_id: i64, value: i64 },
}

/// Result type for dictionary operations.
pub type Result<T> = std::result::Result<T, Error>;
