//! Field validation for student records.
//!
//! All checks run on already-trimmed text.

use crate::error::ValidationError;

/// Minimum number of digits in a phone number.
pub const PHONE_MIN_DIGITS: usize = 7;

/// Maximum number of digits in a phone number.
pub const PHONE_MAX_DIGITS: usize = 15;

/// Validate a name: it must not be empty.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Validate an age: empty, or decimal digits only.
///
/// No range check and no leading-zero normalization.
pub fn validate_age(age: &str) -> Result<(), ValidationError> {
    if age.is_empty() || all_digits(age) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAge(age.to_string()))
    }
}

/// Validate a phone number: empty, or 7-15 decimal digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Ok(());
    }
    // all_digits guarantees one byte per char
    let len = phone.len();
    if all_digits(phone) && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
