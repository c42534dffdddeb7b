//! Record: one student entry.
//!
//! A record is immutable. Every field is trimmed and validated when the
//! record is built; changing a record means building a new one.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{LookupField, RollNo};
use crate::validation::{validate_age, validate_name, validate_phone};

/// A validated student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    roll_no: RollNo,
    name: String,
    course: String,
    age: String,
    phone: String,
    address: String,
}

impl Record {
    /// Build a record from the six field values.
    ///
    /// Each value is trimmed before validation:
    /// - `roll_no` and `name` must be non-empty
    /// - `age` must be empty or digits only
    /// - `phone` must be empty or 7-15 digits
    pub fn new(
        roll_no: &str,
        name: &str,
        course: &str,
        age: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        let roll_no = RollNo::parse(roll_no)?;

        let name = name.trim();
        validate_name(name)?;

        let age = age.trim();
        validate_age(age)?;

        let phone = phone.trim();
        validate_phone(phone)?;

        Ok(Self {
            roll_no,
            name: name.to_string(),
            course: course.trim().to_string(),
            age: age.to_string(),
            phone: phone.to_string(),
            address: address.trim().to_string(),
        })
    }

    /// Get the roll number.
    pub fn roll_no(&self) -> &RollNo {
        &self.roll_no
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Get the address. May span several lines.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the value of a lookup field.
    pub fn field(&self, field: LookupField) -> &str {
        match field {
            LookupField::RollNo => self.roll_no.as_str(),
            LookupField::Name => &self.name,
        }
    }

    /// Start a builder pre-filled with this record's values.
    pub fn to_builder(&self) -> RecordBuilder {
        RecordBuilder {
            roll_no: self.roll_no.to_string(),
            name: self.name.clone(),
            course: self.course.clone(),
            age: self.age.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}

#[derive(Deserialize)]
struct RawRecord {
    roll_no: String,
    name: String,
    #[serde(default)]
    course: String,
    #[serde(default)]
    age: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
}

impl TryFrom<RawRecord> for Record {
    type Error = ValidationError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Record::new(
            &raw.roll_no,
            &raw.name,
            &raw.course,
            &raw.age,
            &raw.phone,
            &raw.address,
        )
    }
}

/// Builder for creating records.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    roll_no: String,
    name: String,
    course: String,
    age: String,
    phone: String,
    address: String,
}

impl RecordBuilder {
    /// Start building a record with its two required fields.
    pub fn new(roll_no: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            roll_no: roll_no.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn roll_no(mut self, roll_no: impl Into<String>) -> Self {
        self.roll_no = roll_no.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Trim, validate, and build the record.
    pub fn build(self) -> Result<Record, ValidationError> {
        Record::new(
            &self.roll_no,
            &self.name,
            &self.course,
            &self.age,
            &self.phone,
            &self.address,
        )
    }
}
