//! Mapping between records and their six-field rows.
//!
//! Field order is fixed: roll number, name, course, age, phone, address.
//! The canonical header row names the same columns in the same order.

use crate::error::CoreError;
use crate::line::{decode_line, encode_line};
use crate::record::Record;

/// Number of fields in a record row.
pub const FIELD_COUNT: usize = 6;

/// The canonical header row.
pub const HEADER: [&str; FIELD_COUNT] = ["Roll No", "Name", "Course", "Age", "Phone", "Address"];

/// The encoded header line: `Roll No,Name,Course,Age,Phone,Address`.
pub fn header_line() -> String {
    encode_line(&HEADER)
}

/// Project a record onto its row.
pub fn to_fields(record: &Record) -> [String; FIELD_COUNT] {
    [
        record.roll_no().to_string(),
        record.name().to_string(),
        record.course().to_string(),
        record.age().to_string(),
        record.phone().to_string(),
        record.address().to_string(),
    ]
}

/// Build a record from a row.
///
/// Needs at least six fields; any beyond the sixth are ignored. Values go
/// through the same trimming and validation as [`Record::new`].
pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Record, CoreError> {
    if fields.len() < FIELD_COUNT {
        return Err(CoreError::ShortRow {
            expected: FIELD_COUNT,
            got: fields.len(),
        });
    }
    let record = Record::new(
        fields[0].as_ref(),
        fields[1].as_ref(),
        fields[2].as_ref(),
        fields[3].as_ref(),
        fields[4].as_ref(),
        fields[5].as_ref(),
    )?;
    Ok(record)
}

/// Encode a record as one line.
pub fn encode_record(record: &Record) -> String {
    encode_line(&to_fields(record))
}

/// Decode one line into a record.
///
/// Short lines are padded, so this only fails on validation.
pub fn decode_record(line: &str) -> Result<Record, CoreError> {
    from_fields(&decode_line(line, FIELD_COUNT))
}
