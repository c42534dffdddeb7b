//! Whole-document encoding shared by every gateway.
//!
//! A document is the header line followed by one line per record, each
//! terminated by `\n`.

use roster_core::{
    decode_line, encode_line, encode_record, from_fields, header_line, logical_lines, CoreError,
    Record, FIELD_COUNT,
};

use crate::traits::{Loaded, LoadedRow, RejectReason, RejectedRow};

/// Render records as a complete document.
pub fn render_document(records: &[Record]) -> String {
    let mut doc = header_line();
    doc.push('\n');
    for record in records {
        doc.push_str(&encode_record(record));
        doc.push('\n');
    }
    doc
}

/// Parse a complete document.
///
/// The first line is skipped only if it decodes and re-encodes to exactly
/// the header line; otherwise it is data. Blank lines carry no record and
/// are skipped. Rows that fail validation are collected in
/// [`Loaded::rejected`].
pub fn parse_document(text: &str) -> Loaded {
    let header = header_line();
    let mut loaded = Loaded::default();

    for (idx, line) in logical_lines(text).into_iter().enumerate() {
        let fields = decode_line(&line.text, FIELD_COUNT);

        if idx == 0 && encode_line(&fields) == header {
            loaded.header_skipped = true;
            continue;
        }
        if line.text.trim().is_empty() {
            continue;
        }

        match from_fields(&fields) {
            Ok(record) => loaded.rows.push(LoadedRow {
                line: line.number,
                record,
            }),
            Err(e) => {
                let reason = match e {
                    CoreError::Validation(v) => RejectReason::Invalid(v),
                    other => RejectReason::Malformed(other.to_string()),
                };
                tracing::warn!(line = line.number, %reason, "skipping row");
                loaded.rejected.push(RejectedRow {
                    line: line.number,
                    reason,
                });
            }
        }
    }

    loaded
}
