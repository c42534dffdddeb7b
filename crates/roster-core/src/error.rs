//! Error types for Roster Core.

use thiserror::Error;

/// Core errors that can occur while mapping text to records.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("row has {got} fields, expected at least {expected}")]
    ShortRow { expected: usize, got: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Validation errors raised while constructing a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("roll number is required")]
    EmptyRollNo,

    #[error("name is required")]
    EmptyName,

    #[error("age must be a number, got {0:?}")]
    InvalidAge(String),

    #[error("phone must be 7-15 digits, got {0:?}")]
    InvalidPhone(String),
}
