//! Error types for the store module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during store and persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already uses this roll number (ignoring case).
    #[error("roll number already exists: {0}")]
    DuplicateId(String),

    /// No record has this roll number.
    #[error("roll number not found: {0}")]
    NotFound(String),

    /// Reading or writing the backing document failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Whether this is a duplicate roll number.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateId(_))
    }

    /// Whether this is a missing roll number.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
