//! End-to-end behaviour of a file-backed roster.
//!
//! Every test works on a CSV file in its own temp directory and checks both
//! the in-memory view and the file contents.

use std::fs;
use std::path::PathBuf;

use roster::{LookupField, Record, RecordBuilder, Roster, RosterConfig, RosterError};
use tempfile::TempDir;

const HEADER: &str = "Roll No,Name,Course,Age,Phone,Address";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

struct Setup {
    _dir: TempDir,
    path: PathBuf,
}

impl Setup {
    fn new() -> Self {
        init_tracing();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.csv");
        Self { _dir: dir, path }
    }

    fn with_contents(contents: &str) -> Self {
        let setup = Self::new();
        fs::write(&setup.path, contents).unwrap();
        setup
    }

    fn open(&self) -> Roster<roster::CsvFileGateway> {
        let mut roster = Roster::with_file(RosterConfig::with_path(&self.path));
        roster.reload().unwrap();
        roster
    }

    fn contents(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }
}

fn student(roll_no: &str, name: &str) -> Record {
    RecordBuilder::new(roll_no, name).build().unwrap()
}

fn roll_nos(roster: &Roster<roster::CsvFileGateway>) -> Vec<String> {
    roster.all().iter().map(|r| r.roll_no().to_string()).collect()
}

#[test]
fn duplicate_roll_no_is_rejected_ignoring_case() {
    let setup = Setup::new();
    let mut roster = setup.open();

    roster.add(student("A1", "Asha")).unwrap();
    let err = roster.add(student("a1", "Other")).unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(roster.len(), 1);
    assert_eq!(setup.contents(), format!("{HEADER}\nA1,Asha,,,,\n"));
}

#[test]
fn quoted_fields_survive_a_restart() {
    let setup = Setup::new();
    let original = RecordBuilder::new("A1", "Doe, John")
        .course("5\" tall")
        .address("line1\nline2")
        .build()
        .unwrap();

    {
        let mut roster = setup.open();
        roster.add(original.clone()).unwrap();
    }

    assert_eq!(
        setup.contents(),
        format!("{HEADER}\nA1,\"Doe, John\",\"5\"\" tall\",,,\"line1\nline2\"\n")
    );

    let reopened = setup.open();
    assert_eq!(reopened.all(), &[original]);
}

#[test]
fn header_line_is_skipped() {
    let setup = Setup::with_contents(&format!("{HEADER}\nA1,Asha,CS,20,,\n"));
    let mut roster = Roster::with_file(RosterConfig::with_path(&setup.path));

    let report = roster.reload().unwrap();
    assert!(report.header_skipped);
    assert_eq!(roll_nos(&roster), vec!["A1"]);
}

#[test]
fn file_without_header_loads_first_line_as_data() {
    let setup = Setup::with_contents("B1,Bala,CS,20,9999999999,Addr\n");
    let mut roster = Roster::with_file(RosterConfig::with_path(&setup.path));

    let report = roster.reload().unwrap();
    assert!(!report.header_skipped);
    assert_eq!(report.loaded, 1);
    assert_eq!(roster.get("B1").map(|r| r.address()), Some("Addr"));
}

#[test]
fn first_save_adds_header_to_headerless_file() {
    let setup = Setup::with_contents("B1,Bala,CS,20,9999999999,Addr\n");
    let mut roster = setup.open();

    roster.add(student("C1", "Chen")).unwrap();
    assert_eq!(
        setup.contents(),
        format!("{HEADER}\nB1,Bala,CS,20,9999999999,Addr\nC1,Chen,,,,\n")
    );
}

#[test]
fn update_into_existing_roll_no_leaves_both_records() {
    let setup = Setup::new();
    let mut roster = setup.open();
    roster.add(student("A1", "Asha")).unwrap();
    roster.add(student("B1", "Bala")).unwrap();
    let before = setup.contents();

    let err = roster.update("A1", student("B1", "Asha")).unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(roster.get("A1").map(|r| r.name()), Some("Asha"));
    assert_eq!(roster.get("B1").map(|r| r.name()), Some("Bala"));
    assert_eq!(setup.contents(), before);
}

#[test]
fn update_keeps_position() {
    let setup = Setup::new();
    let mut roster = setup.open();
    roster.add(student("A1", "Asha")).unwrap();
    roster.add(student("B2", "Bala")).unwrap();
    roster.add(student("C3", "Chen")).unwrap();

    let changed = roster.get("B2").unwrap().to_builder().age("21").build().unwrap();
    roster.update("B2", changed).unwrap();

    assert_eq!(roll_nos(&roster), vec!["A1", "B2", "C3"]);
    assert_eq!(
        setup.contents(),
        format!("{HEADER}\nA1,Asha,,,,\nB2,Bala,,21,,\nC3,Chen,,,,\n")
    );
}

#[test]
fn sort_by_roll_no_ignores_case_and_persists() {
    let setup = Setup::new();
    let mut roster = setup.open();
    roster.add(student("B2", "Bala")).unwrap();
    roster.add(student("a1", "Asha")).unwrap();

    roster.sort_by(LookupField::RollNo).unwrap();

    assert_eq!(roll_nos(&roster), vec!["a1", "B2"]);
    assert_eq!(roll_nos(&setup.open()), vec!["a1", "B2"]);
}

#[test]
fn delete_removes_from_file() {
    let setup = Setup::new();
    let mut roster = setup.open();
    roster.add(student("A1", "Asha")).unwrap();
    roster.add(student("B2", "Bala")).unwrap();

    assert!(roster.delete("b2").unwrap());
    assert_eq!(setup.contents(), format!("{HEADER}\nA1,Asha,,,,\n"));
}

#[test]
fn search_does_not_touch_the_file() {
    let setup = Setup::new();
    let mut roster = setup.open();
    roster.add(student("A1", "Asha Rao")).unwrap();
    roster.add(student("B2", "Bala")).unwrap();
    let before = setup.contents();

    let hits = roster.search(LookupField::Name, "rao").unwrap();
    assert_eq!(hits.len(), 1);
    assert!(matches!(
        roster.search(LookupField::RollNo, ""),
        Err(RosterError::EmptyQuery)
    ));
    assert_eq!(setup.contents(), before);
}

#[test]
fn missing_file_starts_empty_and_is_created_on_first_change() {
    let setup = Setup::new();
    let mut roster = setup.open();

    assert!(roster.is_empty());
    assert!(!setup.path.exists());

    roster.add(student("A1", "Asha")).unwrap();
    assert!(setup.path.exists());
}

#[test]
fn unreadable_file_leaves_roster_empty() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    // A directory cannot be read as a file.
    let mut roster = Roster::with_file(RosterConfig::with_path(dir.path()));

    let err = roster.reload().unwrap_err();
    assert!(matches!(err, RosterError::Store(_)));
    assert!(roster.is_empty());
}

#[test]
fn save_failure_is_reported_and_retried() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("students.csv");
    let mut roster = Roster::with_file(RosterConfig::with_path(&path));
    roster.reload().unwrap();

    let err = roster.add(student("A1", "Asha")).unwrap_err();
    assert!(matches!(err, RosterError::Unsaved(_)));
    assert!(roster.is_dirty());
    assert_eq!(roster.len(), 1);

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    roster.save().unwrap();
    assert!(!roster.is_dirty());
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{HEADER}\nA1,Asha,,,,\n"));
}

#[test]
fn invalid_and_duplicate_rows_are_reported() {
    let setup = Setup::with_contents(&format!(
        "{HEADER}\nA1,Asha,,,,\nB2,Bala,,x,,\na1,Again,,,,\nC3,Chen,,,123,\n"
    ));
    let mut roster = Roster::with_file(RosterConfig::with_path(&setup.path));

    let report = roster.reload().unwrap();
    assert_eq!(report.loaded, 1);
    let lines: Vec<_> = report.rejected.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![3, 4, 5]);
}

#[test]
fn strict_load_refuses_invalid_rows() {
    let setup = Setup::with_contents(&format!("{HEADER}\nA1,Asha,,,,\nB2,Bala,,x,,\n"));
    let config = RosterConfig::with_path(&setup.path).strict(true);
    let mut roster = Roster::with_file(config);

    let err = roster.reload().unwrap_err();
    assert!(matches!(err, RosterError::InvalidRow { line: 3, .. }));
    assert!(roster.is_empty());
}

#[test]
fn crlf_file_loads() {
    let setup = Setup::with_contents(&format!("{HEADER}\r\nA1,Asha,CS,20,,\r\n"));
    let roster = setup.open();
    assert_eq!(roster.get("A1").map(|r| r.course()), Some("CS"));
}
