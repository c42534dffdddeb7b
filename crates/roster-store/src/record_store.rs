//! RecordStore: ordered, uniquely keyed records in memory.
//!
//! Records keep insertion order. Updates replace a slot in place, deletes
//! remove it, and sorting replaces the stored order.

use roster_core::{fold_case, LookupField, Record, RollNo};

use crate::error::{Result, StoreError};
use crate::traits::{LoadReport, Loaded, RejectReason, RejectedRow};

/// In-memory record store.
///
/// No two records share a roll number under case-insensitive comparison.
/// Records handed to the store are assumed valid; validation happens when a
/// [`Record`] is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a decoded document.
    ///
    /// Rows whose roll number repeats an earlier row are rejected and
    /// reported alongside the rows the document itself rejected.
    pub fn from_loaded(loaded: Loaded) -> (Self, LoadReport) {
        let mut store = Self::new();
        let mut rejected = loaded.rejected;

        for row in loaded.rows {
            let roll_no = row.record.roll_no().to_string();
            if store.add(row.record).is_err() {
                tracing::warn!(line = row.line, roll_no = %roll_no, "skipping duplicate row");
                rejected.push(RejectedRow {
                    line: row.line,
                    reason: RejectReason::DuplicateId(roll_no),
                });
            }
        }
        rejected.sort_by_key(|r| r.line);

        let report = LoadReport {
            loaded: store.len(),
            header_skipped: loaded.header_skipped,
            rejected,
        };
        (store, report)
    }

    /// Append a record.
    ///
    /// Fails with `DuplicateId` if any record has the same roll number,
    /// ignoring case. The store is unchanged on failure.
    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.contains(record.roll_no().as_str()) {
            return Err(StoreError::DuplicateId(record.roll_no().to_string()));
        }
        tracing::debug!(roll_no = %record.roll_no(), "adding record");
        self.records.push(record);
        Ok(())
    }

    /// Replace the record matching `old_roll_no` with `record`, in place.
    ///
    /// # Errors
    /// - `NotFound` if no record matches `old_roll_no`.
    /// - `DuplicateId` if `record` takes a different roll number that another
    ///   record already uses.
    pub fn update(&mut self, old_roll_no: &str, record: Record) -> Result<()> {
        let idx = self
            .position(old_roll_no)
            .ok_or_else(|| StoreError::NotFound(old_roll_no.to_string()))?;

        if !record.roll_no().matches(old_roll_no) {
            let clash = self
                .records
                .iter()
                .enumerate()
                .any(|(i, r)| i != idx && r.roll_no().matches(record.roll_no().as_str()));
            if clash {
                return Err(StoreError::DuplicateId(record.roll_no().to_string()));
            }
        }

        tracing::debug!(old = old_roll_no, new = %record.roll_no(), slot = idx, "updating record");
        self.records[idx] = record;
        Ok(())
    }

    /// Remove every record matching `roll_no`, ignoring case.
    ///
    /// Returns whether anything was removed.
    pub fn delete(&mut self, roll_no: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| !r.roll_no().matches(roll_no));
        let removed = before - self.records.len();
        if removed > 0 {
            tracing::debug!(roll_no, removed, "deleted record");
        }
        removed > 0
    }

    /// Records whose `field` contains `query`, ignoring case, in store order.
    ///
    /// An empty query matches every record.
    pub fn search(&self, field: LookupField, query: &str) -> Vec<Record> {
        let needle = fold_case(query);
        self.records
            .iter()
            .filter(|r| fold_case(r.field(field)).contains(&needle))
            .cloned()
            .collect()
    }

    /// Reorder the store by `field`, ignoring case.
    ///
    /// The sort is stable: records with equal keys keep their relative order.
    pub fn sort_by(&mut self, field: LookupField) {
        self.records.sort_by_cached_key(|r| fold_case(r.field(field)));
        tracing::debug!(%field, count = self.records.len(), "sorted records");
    }

    /// All records in current order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Get the record matching `roll_no`, ignoring case.
    pub fn get(&self, roll_no: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.roll_no().matches(roll_no))
    }

    /// Index of the record matching `roll_no`, ignoring case.
    pub fn position(&self, roll_no: &str) -> Option<usize> {
        self.records.iter().position(|r| r.roll_no().matches(roll_no))
    }

    /// Whether a record matches `roll_no`, ignoring case.
    pub fn contains(&self, roll_no: &str) -> bool {
        self.position(roll_no).is_some()
    }

    /// Roll numbers in current order.
    pub fn roll_nos(&self) -> impl Iterator<Item = &RollNo> {
        self.records.iter().map(|r| r.roll_no())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LoadedRow;

    fn record(roll_no: &str, name: &str) -> Record {
        Record::new(roll_no, name, "", "", "", "").unwrap()
    }

    fn roll_nos(store: &RecordStore) -> Vec<&str> {
        store.roll_nos().map(|r| r.as_str()).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = RecordStore::new();
        store.add(record("B2", "Bala")).unwrap();
        store.add(record("A1", "Asha")).unwrap();
        assert_eq!(roll_nos(&store), vec!["B2", "A1"]);
    }

    #[test]
    fn test_add_duplicate_ignores_case() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha")).unwrap();

        let err = store.add(record("a1", "Other")).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name(), "Asha");
    }

    #[test]
    fn test_add_duplicate_ignores_case_per_character() {
        let mut store = RecordStore::new();
        store.add(record("ΟΔΟΣ", "Eleni")).unwrap();

        let err = store.add(record("οδοσ", "Other")).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("οδοσ").map(|r| r.name()), Some("Eleni"));
    }

    #[test]
    fn test_update_in_place() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha")).unwrap();
        store.add(record("B2", "Bala")).unwrap();
        store.add(record("C3", "Chen")).unwrap();

        store.update("b2", record("B2", "Bala K")).unwrap();
        assert_eq!(roll_nos(&store), vec!["A1", "B2", "C3"]);
        assert_eq!(store.all()[1].name(), "Bala K");
    }

    #[test]
    fn test_update_can_rename_roll_no() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha")).unwrap();
        store.add(record("B2", "Bala")).unwrap();

        store.update("A1", record("Z9", "Asha")).unwrap();
        assert_eq!(roll_nos(&store), vec!["Z9", "B2"]);
    }

    #[test]
    fn test_update_can_change_case_of_own_roll_no() {
        let mut store = RecordStore::new();
        store.add(record("a1", "Asha")).unwrap();

        store.update("A1", record("A1", "Asha")).unwrap();
        assert_eq!(roll_nos(&store), vec!["A1"]);
    }

    #[test]
    fn test_update_not_found() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha")).unwrap();

        let err = store.update("X0", record("X0", "Nobody")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.all(), &[record("A1", "Asha")]);
    }

    #[test]
    fn test_update_into_existing_roll_no() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha")).unwrap();
        store.add(record("B1", "Bala")).unwrap();

        let err = store.update("A1", record("b1", "Asha")).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(store.all()[0], record("A1", "Asha"));
        assert_eq!(store.all()[1], record("B1", "Bala"));
    }

    #[test]
    fn test_delete_ignores_case() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha")).unwrap();
        store.add(record("B2", "Bala")).unwrap();

        assert!(store.delete("a1"));
        assert_eq!(roll_nos(&store), vec!["B2"]);
        assert!(!store.delete("a1"));
    }

    #[test]
    fn test_search_by_name_substring() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha Rao")).unwrap();
        store.add(record("B2", "Bala")).unwrap();
        store.add(record("C3", "Rahul")).unwrap();

        let hits = store.search(LookupField::Name, "RA");
        let names: Vec<_> = hits.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Asha Rao", "Rahul"]);
    }

    #[test]
    fn test_search_by_roll_no() {
        let mut store = RecordStore::new();
        store.add(record("CS-101", "Asha")).unwrap();
        store.add(record("ME-102", "Bala")).unwrap();

        let hits = store.search(LookupField::RollNo, "cs");
        assert_eq!(hits, vec![record("CS-101", "Asha")]);
        assert!(store.search(LookupField::RollNo, "EE").is_empty());
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha")).unwrap();
        store.add(record("B2", "Bala")).unwrap();
        assert_eq!(store.search(LookupField::Name, "").len(), 2);
    }

    #[test]
    fn test_sort_by_roll_no_ignores_case() {
        let mut store = RecordStore::new();
        store.add(record("B2", "Bala")).unwrap();
        store.add(record("a1", "Asha")).unwrap();

        store.sort_by(LookupField::RollNo);
        assert_eq!(roll_nos(&store), vec!["a1", "B2"]);
    }

    #[test]
    fn test_sort_by_name_is_stable() {
        let mut store = RecordStore::new();
        store.add(record("1", "bala")).unwrap();
        store.add(record("2", "Asha")).unwrap();
        store.add(record("3", "BALA")).unwrap();
        store.add(record("4", "asha")).unwrap();

        store.sort_by(LookupField::Name);
        assert_eq!(roll_nos(&store), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_get_and_position() {
        let mut store = RecordStore::new();
        store.add(record("A1", "Asha")).unwrap();
        store.add(record("B2", "Bala")).unwrap();

        assert_eq!(store.get("b2").map(|r| r.name()), Some("Bala"));
        assert_eq!(store.position("B2"), Some(1));
        assert_eq!(store.get("C3"), None);
    }

    #[test]
    fn test_from_loaded_rejects_duplicates() {
        let loaded = Loaded {
            rows: vec![
                LoadedRow { line: 2, record: record("A1", "Asha") },
                LoadedRow { line: 3, record: record("a1", "Again") },
                LoadedRow { line: 4, record: record("B2", "Bala") },
            ],
            header_skipped: true,
            rejected: vec![],
        };

        let (store, report) = RecordStore::from_loaded(loaded);
        assert_eq!(roll_nos(&store), vec!["A1", "B2"]);
        assert_eq!(report.loaded, 2);
        assert!(report.header_skipped);
        assert_eq!(
            report.rejected,
            vec![RejectedRow {
                line: 3,
                reason: RejectReason::DuplicateId("a1".into()),
            }]
        );
    }
}
