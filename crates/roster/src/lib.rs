//! # Roster
//!
//! The unified API for keeping a student roster in memory and in sync with a
//! CSV file.
//!
//! ## Overview
//!
//! - **Records**: Immutable, validated student entries keyed by roll number
//! - **Store**: Ordered records with case-insensitive unique roll numbers
//! - **Write-through**: Every change rewrites the whole file
//! - **Lenient loading**: Short rows are padded, invalid rows are reported
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster::{LookupField, Record, Roster, RosterConfig};
//!
//! let mut roster = Roster::with_file(RosterConfig::with_path("students.csv"));
//! if let Err(e) = roster.reload() {
//!     eprintln!("warning: {e}");
//! }
//!
//! let record = Record::new("A1", "Asha", "CS", "20", "9999999999", "12 Main St").unwrap();
//! roster.add(record).unwrap();
//!
//! roster.sort_by(LookupField::Name).unwrap();
//! for hit in roster.search(LookupField::Name, "ash").unwrap() {
//!     println!("{} {}", hit.roll_no(), hit.name());
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `roster::core` - Records, validation, and the CSV codec
//! - `roster::store` - The record store and persistence gateways

pub mod config;
pub mod error;
pub mod roster;

pub use roster_core as core;
pub use roster_store as store;

pub use config::{RosterConfig, DEFAULT_PATH};
pub use error::{Result, RosterError};
pub use roster::Roster;

pub use roster_core::{LookupField, Record, RecordBuilder, RollNo, ValidationError};
pub use roster_store::{
    CsvFileGateway, LoadReport, MemoryGateway, PersistenceGateway, RejectReason, RejectedRow,
    StoreError,
};
