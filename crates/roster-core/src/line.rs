//! Quoted CSV line codec.
//!
//! Encoding rules:
//! - Fields are joined with `,`, no trailing delimiter
//! - A field containing `,`, `"` or `\n` is wrapped in `"` with inner `"` doubled
//! - Any other field is written verbatim
//!
//! Decoding is a lenient scanner: it never fails, and it accepts lines that
//! the encoder would never produce (e.g. a quote opening mid-field).

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Encode fields into a single delimited line.
pub fn encode_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        encode_field(&mut line, field.as_ref());
    }
    line
}

fn encode_field(buf: &mut String, field: &str) {
    if !needs_quotes(field) {
        buf.push_str(field);
        return;
    }
    buf.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            buf.push(QUOTE);
        }
        buf.push(c);
    }
    buf.push(QUOTE);
}

fn needs_quotes(field: &str) -> bool {
    field.contains([DELIMITER, QUOTE, '\n'])
}

/// Decode a line into fields, padding with empty fields up to `expected`.
///
/// Lines with more than `expected` fields keep the extras. A line always
/// decodes to at least one field, so `decode_line(&encode_line(f), f.len())`
/// gives back `f` for every non-empty `f`; the empty sequence encodes to `""`
/// and decodes to `[""]`.
pub fn decode_line(line: &str, expected: usize) -> Vec<String> {
    let mut fields = Vec::with_capacity(expected);
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == DELIMITER {
            fields.push(std::mem::take(&mut current));
        } else if c == QUOTE {
            in_quotes = true;
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    if fields.len() < expected {
        fields.resize(expected, String::new());
    }
    fields
}

/// One logical line of a document, possibly spanning several physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the physical line this logical line starts on.
    pub number: usize,
    /// The line text, with embedded newlines for quoted multi-line fields.
    pub text: String,
}

/// Split document text into logical lines.
///
/// A physical line continues onto the next one, joined with `\n`, only while
/// a quote that opened at the start of a field is still open; that is the
/// only shape [`encode_line`] writes. A quote opened mid-field ends with its
/// physical line. If the document ends with such a field still open, the
/// first line of the block stands alone and scanning resumes on the line
/// after it. A trailing `\r` on each physical line is dropped. The empty piece
/// after a final newline is not a line.
pub fn logical_lines(text: &str) -> Vec<LogicalLine> {
    let mut physical: Vec<&str> = text
        .split('\n')
        .map(|raw| raw.strip_suffix('\r').unwrap_or(raw))
        .collect();
    if physical.last() == Some(&"") {
        physical.pop();
    }

    let mut lines = Vec::new();
    let mut start = 0;
    while start < physical.len() {
        let end = closing_line(&physical[start..]).map_or(start, |offset| start + offset);
        lines.push(LogicalLine {
            number: start + 1,
            text: physical[start..=end].join("\n"),
        });
        start = end + 1;
    }
    lines
}

/// Offset of the physical line that ends the logical line starting at
/// `pieces[0]`, or `None` if a quoted field is still open at the end.
fn closing_line(pieces: &[&str]) -> Option<usize> {
    let mut scan = QuoteScan::default();
    for (offset, piece) in pieces.iter().enumerate() {
        scan.feed(piece);
        if !scan.continues() {
            return Some(offset);
        }
        // The joining newline is field content.
        scan.at_field_start = false;
    }
    None
}

/// Quote state of the `decode_line` scanner, carried across physical lines.
struct QuoteScan {
    in_quotes: bool,
    opened_at_field_start: bool,
    at_field_start: bool,
}

impl Default for QuoteScan {
    fn default() -> Self {
        Self {
            in_quotes: false,
            opened_at_field_start: false,
            at_field_start: true,
        }
    }
}

impl QuoteScan {
    fn feed(&mut self, piece: &str) {
        let mut chars = piece.chars().peekable();
        while let Some(c) = chars.next() {
            if self.in_quotes {
                if c == QUOTE {
                    if chars.peek() == Some(&QUOTE) {
                        chars.next();
                    } else {
                        self.in_quotes = false;
                    }
                }
            } else if c == DELIMITER {
                self.at_field_start = true;
                continue;
            } else if c == QUOTE {
                self.in_quotes = true;
                self.opened_at_field_start = self.at_field_start;
            }
            self.at_field_start = false;
        }
    }

    fn continues(&self) -> bool {
        self.in_quotes && self.opened_at_field_start
    }
}
