//! # Roster Store
//!
//! The in-memory record store and the gateways that persist it.
//!
//! ## Overview
//!
//! [`RecordStore`] holds records in display order and enforces that no two
//! share a roll number (ignoring case). A [`PersistenceGateway`] loads the
//! store's contents at startup and rewrites them in full after each change.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - Ordered, uniquely keyed records
//! - [`PersistenceGateway`] - Load/save trait for backing documents
//! - [`CsvFileGateway`] - CSV file on disk
//! - [`MemoryGateway`] - In-memory document for tests
//! - [`LoadReport`] - What a load kept and what it rejected
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster_core::Record;
//! use roster_store::{CsvFileGateway, PersistenceGateway, RecordStore};
//!
//! let gateway = CsvFileGateway::new("students.csv");
//! let (mut store, report) = RecordStore::from_loaded(gateway.load().unwrap());
//! println!("loaded {} records", report.loaded);
//!
//! let record = Record::new("A1", "Asha", "CS", "20", "", "").unwrap();
//! store.add(record).unwrap();
//! gateway.save(store.all()).unwrap();
//! ```
//!
//! ## Design Notes
//!
//! - **Whole-document rewrite**: `save` always writes the header and every record
//! - **Lenient loading**: short rows are padded; invalid rows are reported, not fatal
//! - **Header heuristic**: a first line equal to the header is skipped, anything
//!   else is data

pub mod csv_file;
pub mod document;
pub mod error;
pub mod memory;
pub mod record_store;
pub mod traits;

pub use csv_file::CsvFileGateway;
pub use document::{parse_document, render_document};
pub use error::{Result, StoreError};
pub use memory::MemoryGateway;
pub use record_store::RecordStore;
pub use traits::{LoadReport, Loaded, LoadedRow, PersistenceGateway, RejectReason, RejectedRow};
