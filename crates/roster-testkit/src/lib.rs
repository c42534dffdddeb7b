//! # Roster Testkit
//!
//! Testing utilities for Roster.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Field sequences with their exact encoded lines
//! - **Generators**: Proptest strategies for fields and records
//! - **Fixtures**: A file-backed roster in a temp directory
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the on-disk format:
//!
//! ```rust
//! use roster_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, line) in verify_all_vectors() {
//!     assert!(ok, "{name}: {line:?}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use roster_core::{decode_line, encode_line};
//! use roster_testkit::generators::fields;
//!
//! proptest! {
//!     #[test]
//!     fn line_round_trip(fields in fields(8)) {
//!         prop_assert_eq!(decode_line(&encode_line(&fields), fields.len()), fields);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use roster_testkit::fixtures::{student, TestFixture};
//!
//! let mut fixture = TestFixture::new();
//! fixture.roster.add(student("A1", "Asha")).unwrap();
//! assert!(fixture.contents().contains("A1,Asha"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_students, student, TestFixture};
pub use generators::{record_from_params, RecordParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
