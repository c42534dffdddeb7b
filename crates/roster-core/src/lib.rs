//! # Roster Core
//!
//! Pure primitives for Roster: student records, field validation, and the
//! delimited-text codec used to persist them.
//!
//! This crate contains no I/O. It is pure computation over text.
//!
//! ## Key Types
//!
//! - [`Record`] - One immutable student entry
//! - [`RollNo`] - The identity field, compared case-insensitively
//! - [`LookupField`] - Selector for search and sort (`RollNo` or `Name`)
//!
//! ## Encoding
//!
//! Records are stored one per line in quoted CSV. See the [`line`] module for
//! the field-level codec and [`codec`] for the record mapping and header.

pub mod codec;
pub mod error;
pub mod line;
pub mod record;
pub mod types;
pub mod validation;

pub use codec::{
    decode_record, encode_record, from_fields, header_line, to_fields, FIELD_COUNT, HEADER,
};
pub use error::{CoreError, ValidationError};
pub use line::{decode_line, encode_line, logical_lines, LogicalLine};
pub use record::{Record, RecordBuilder};
pub use types::{fold_case, LookupField, RollNo, UnknownField};
pub use validation::{validate_age, validate_name, validate_phone};
