//! Proptest generators for property-based testing.

use proptest::prelude::*;

use roster_core::{LookupField, Record};

/// Generate field text, including the characters that force quoting.
pub fn field_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 éÅ,\"\n.-]{0,24}".prop_map(String::from)
}

/// Generate between one and `max` fields.
pub fn fields(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(field_text(), 1..=max.max(1))
}

/// Generate a roll number. Mixed case, so collisions under case folding happen.
pub fn roll_no() -> impl Strategy<Value = String> {
    "[aAbB][0-9]{1,2}".prop_map(String::from)
}

/// Generate a name that survives trimming.
pub fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,.]{0,12}".prop_map(String::from)
}

/// Generate an age: empty or digits.
pub fn age() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[0-9]{1,3}".prop_map(String::from)]
}

/// Generate a phone number: empty or 7-15 digits.
pub fn phone() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[0-9]{7,15}".prop_map(String::from)]
}

/// Generate a lookup field.
pub fn lookup_field() -> impl Strategy<Value = LookupField> {
    prop_oneof![Just(LookupField::RollNo), Just(LookupField::Name)]
}

/// Parameters for generating a valid record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub roll_no: String,
    pub name: String,
    pub course: String,
    pub age: String,
    pub phone: String,
    pub address: String,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (roll_no(), name(), field_text(), age(), phone(), field_text())
            .prop_map(|(roll_no, name, course, age, phone, address)| RecordParams {
                roll_no,
                name,
                course,
                age,
                phone,
                address,
            })
            .boxed()
    }
}

/// Build a record from parameters.
///
/// Generated parameters always validate.
pub fn record_from_params(params: &RecordParams) -> Record {
    Record::new(
        &params.roll_no,
        &params.name,
        &params.course,
        &params.age,
        &params.phone,
        &params.address,
    )
    .expect("generated parameters are valid")
}

/// Generate a valid record.
pub fn record() -> impl Strategy<Value = Record> {
    any::<RecordParams>().prop_map(|p| record_from_params(&p))
}

/// Generate a list of valid records; roll numbers may collide.
pub fn records(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..=max)
}
