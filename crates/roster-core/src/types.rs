//! Strong type definitions for Roster.
//!
//! The identity field is a newtype so that case-insensitive comparison is
//! the only comparison callers reach for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Fold text for case-insensitive comparison.
///
/// Lowercases one character at a time, without the context rules of
/// [`str::to_lowercase`] (a word-final `Σ` folds to `σ`, not `ς`).
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// A student's roll number: the identity field of a record.
///
/// Always trimmed and non-empty. The stored text keeps its original case;
/// [`RollNo::matches`] compares case-insensitively.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RollNo(String);

impl RollNo {
    /// Parse a roll number, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyRollNo);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the roll number as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The case-folded key used for uniqueness and lookup.
    pub fn key(&self) -> String {
        fold_case(&self.0)
    }

    /// Check whether `other` names the same roll number, ignoring case.
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other || self.key() == fold_case(other)
    }
}

impl fmt::Debug for RollNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RollNo({})", self.0)
    }
}

impl fmt::Display for RollNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RollNo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RollNo {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<RollNo> for String {
    fn from(roll_no: RollNo) -> Self {
        roll_no.0
    }
}

/// The record fields that can be searched and sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupField {
    RollNo,
    Name,
}

impl LookupField {
    /// The column label used in the header row.
    pub fn label(self) -> &'static str {
        match self {
            Self::RollNo => "Roll No",
            Self::Name => "Name",
        }
    }
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a selector does not name a lookup field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lookup field: {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for LookupField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_case(s.trim()).as_str() {
            "roll no" | "roll_no" | "rollno" | "roll" | "id" => Ok(Self::RollNo),
            "name" => Ok(Self::Name),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}
