//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use roster::{CsvFileGateway, Record, RecordBuilder, Roster, RosterConfig};
use tempfile::TempDir;

/// A file-backed roster in its own temp directory.
///
/// The directory, and the CSV file in it, go away when the fixture drops.
pub struct TestFixture {
    pub roster: Roster<CsvFileGateway>,
    dir: TempDir,
}

impl TestFixture {
    /// Create a fixture with no file on disk yet.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("students.csv");
        Self {
            roster: Roster::with_file(RosterConfig::with_path(path)),
            dir,
        }
    }

    /// Create a fixture whose file starts with `contents`, already loaded.
    pub fn with_contents(contents: &str) -> Self {
        let mut fixture = Self::new();
        fixture.write_raw(contents);
        fixture.reopen();
        fixture
    }

    /// Path of the backing CSV file.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("students.csv")
    }

    /// The temp directory holding the file.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Current file contents; empty if the file does not exist.
    pub fn contents(&self) -> String {
        fs::read_to_string(self.path()).unwrap_or_default()
    }

    /// Overwrite the file behind the roster's back.
    pub fn write_raw(&self, contents: &str) {
        fs::write(self.path(), contents).expect("write fixture file");
    }

    /// Replace the roster with a fresh one loaded from the file.
    pub fn reopen(&mut self) {
        let mut roster = Roster::with_file(self.roster.config().clone());
        roster.reload().expect("reload fixture file");
        self.roster = roster;
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A record with only the required fields set.
pub fn student(roll_no: &str, name: &str) -> Record {
    RecordBuilder::new(roll_no, name)
        .build()
        .expect("valid student")
}

/// A small, fully populated roster in insertion order.
pub fn sample_students() -> Vec<Record> {
    [
        ("B1", "Bala", "CS", "20", "9999999999", "Addr"),
        ("A2", "Asha Rao", "Maths", "19", "", "12 Main St"),
        ("c3", "Chen", "Physics", "", "5550100", "Flat 4, Hill Rd"),
        ("D4", "asha", "", "22", "", ""),
    ]
    .into_iter()
    .map(|(roll_no, name, course, age, phone, address)| {
        Record::new(roll_no, name, course, age, phone, address).expect("valid sample")
    })
    .collect()
}
