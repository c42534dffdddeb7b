//! PersistenceGateway trait: the interface for record persistence.
//!
//! The store is storage-agnostic. Implementations include a CSV file on
//! disk (primary) and an in-memory document (for tests).

use roster_core::{Record, ValidationError};
use thiserror::Error;

use crate::error::Result;

/// A record read from a document, with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRow {
    /// 1-based physical line number.
    pub line: usize,
    pub record: Record,
}

/// Why a row did not make it into the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The row's fields failed record validation.
    #[error("invalid row: {0}")]
    Invalid(#[from] ValidationError),

    /// The row could not be mapped to a record.
    #[error("malformed row: {0}")]
    Malformed(String),

    /// An earlier row already used this roll number.
    #[error("duplicate roll number: {0}")]
    DuplicateId(String),
}

/// A row that was skipped during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based physical line number.
    pub line: usize,
    pub reason: RejectReason,
}

/// The contents of a document, decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    /// Decoded rows, in document order.
    pub rows: Vec<LoadedRow>,
    /// Whether the first line matched the canonical header and was skipped.
    pub header_skipped: bool,
    /// Rows that failed to decode into records.
    pub rejected: Vec<RejectedRow>,
}

impl Loaded {
    /// The decoded records, in document order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter().map(|row| &row.record)
    }
}

/// Summary of a load into a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records now in the store.
    pub loaded: usize,
    /// Whether a header line was skipped.
    pub header_skipped: bool,
    /// Rows skipped, in line order.
    pub rejected: Vec<RejectedRow>,
}

impl LoadReport {
    /// Whether every data row was loaded.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// The gateway trait: load and save a whole record document.
///
/// # Design Notes
///
/// - **Missing is empty**: loading a document that does not exist yields an
///   empty [`Loaded`], not an error.
/// - **Full overwrite**: `save` replaces the whole document with the header
///   followed by `records` in order. There are no partial updates.
pub trait PersistenceGateway {
    /// Read and decode the document.
    fn load(&self) -> Result<Loaded>;

    /// Replace the document with `records`.
    fn save(&self, records: &[Record]) -> Result<()>;
}
