//! Error types for the Roster facade.

use roster_core::ValidationError;
use roster_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Field values do not form a valid record.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The store refused the operation, or a load failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A search was asked for with a blank query.
    #[error("search query is empty")]
    EmptyQuery,

    /// The change was applied in memory but could not be saved.
    ///
    /// The file is now stale until a later save succeeds.
    #[error("change applied but not saved: {0}")]
    Unsaved(#[source] StoreError),

    /// A strict load hit a row it could not load.
    #[error("line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },
}

impl RosterError {
    /// Whether the operation failed on a duplicate roll number.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_duplicate())
    }

    /// Whether the operation failed on a missing roll number.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }
}

/// Result type for Roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
