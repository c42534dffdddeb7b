//! Golden line vectors for the on-disk format.
//!
//! Each vector pairs a field sequence with the exact line the encoder must
//! produce for it. Any implementation reading or writing the same files must
//! agree on every one.

use serde::Serialize;

use roster_core::{decode_line, encode_line};

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Field values, in order.
    pub fields: &'static [&'static str],
    /// The exact encoded line.
    pub line: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "header",
            fields: &["Roll No", "Name", "Course", "Age", "Phone", "Address"],
            line: "Roll No,Name,Course,Age,Phone,Address",
        },
        GoldenVector {
            name: "plain row",
            fields: &["B1", "Bala", "CS", "20", "9999999999", "Addr"],
            line: "B1,Bala,CS,20,9999999999,Addr",
        },
        GoldenVector {
            name: "comma, quote and newline",
            fields: &["Doe, John", "5\" tall", "line1\nline2"],
            line: "\"Doe, John\",\"5\"\" tall\",\"line1\nline2\"",
        },
        GoldenVector {
            name: "empty fields",
            fields: &["A1", "Asha", "", "", "", ""],
            line: "A1,Asha,,,,",
        },
        GoldenVector {
            name: "field that is only a quote",
            fields: &["\"", "x"],
            line: "\"\"\"\",x",
        },
        GoldenVector {
            name: "surrounding spaces are not quoted",
            fields: &[" a ", "b c"],
            line: " a ,b c",
        },
        GoldenVector {
            name: "non-ascii text",
            fields: &["Ü7", "Zoë, Åsa"],
            line: "Ü7,\"Zoë, Åsa\"",
        },
    ]
}

/// Check every vector in both directions.
///
/// Returns `(name, matches, encoded_line)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let encoded = encode_line(v.fields);
            let decoded = decode_line(v.line, v.fields.len());
            let matches = encoded == v.line && decoded == v.fields;
            (v.name.to_string(), matches, encoded)
        })
        .collect()
}

/// All vectors as pretty JSON, for sharing with other implementations.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}
