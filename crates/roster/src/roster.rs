//! The Roster: student records kept in memory and written through to disk.
//!
//! Every change to the store is followed by a full save through the
//! gateway. A change the gateway fails to save stays applied in memory and
//! the roster is marked dirty until a later save succeeds.

use roster_core::{LookupField, Record};
use roster_store::{CsvFileGateway, LoadReport, PersistenceGateway, RecordStore};

use crate::config::RosterConfig;
use crate::error::{Result, RosterError};

/// The main Roster struct.
///
/// Provides a unified API for:
/// - Loading records from the backing document
/// - Adding, updating, and deleting records
/// - Searching and sorting
/// - Saving, automatically after each change or on request
pub struct Roster<G: PersistenceGateway> {
    /// The persistence backend.
    gateway: G,
    /// Records in display order.
    store: RecordStore,
    config: RosterConfig,
    /// Set when memory holds changes the backend does not.
    dirty: bool,
}

impl Roster<CsvFileGateway> {
    /// Create a roster backed by the CSV file named in `config`.
    ///
    /// Nothing is read until [`Roster::reload`].
    pub fn with_file(config: RosterConfig) -> Self {
        let gateway = CsvFileGateway::new(&config.path);
        Self::new(gateway, config)
    }
}

impl<G: PersistenceGateway> Roster<G> {
    /// Create an empty roster over `gateway`.
    pub fn new(gateway: G, config: RosterConfig) -> Self {
        Self {
            gateway,
            store: RecordStore::new(),
            config,
            dirty: false,
        }
    }

    /// Get the gateway reference.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Get the store reference.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading and Saving
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the in-memory records with the backing document's.
    ///
    /// On any error the roster is left empty. With `strict_load` set, a row
    /// that cannot be loaded is an error instead of being skipped.
    pub fn reload(&mut self) -> Result<LoadReport> {
        self.store.clear();
        self.dirty = false;

        let loaded = self.gateway.load().map_err(|e| {
            tracing::warn!(error = %e, "failed to load records");
            RosterError::from(e)
        })?;

        let (store, report) = RecordStore::from_loaded(loaded);
        if self.config.strict_load {
            if let Some(row) = report.rejected.first() {
                return Err(RosterError::InvalidRow {
                    line: row.line,
                    reason: row.reason.to_string(),
                });
            }
        }

        self.store = store;
        tracing::debug!(
            loaded = report.loaded,
            rejected = report.rejected.len(),
            header_skipped = report.header_skipped,
            "reloaded roster"
        );
        Ok(report)
    }

    /// Save every record now.
    pub fn save(&mut self) -> Result<()> {
        match self.gateway.save(self.store.all()) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                Err(RosterError::Store(e))
            }
        }
    }

    /// Whether memory holds changes the backing document does not.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Save after a change; a failure leaves the change in memory.
    fn write_through(&mut self) -> Result<()> {
        if let Err(e) = self.gateway.save(self.store.all()) {
            self.dirty = true;
            tracing::warn!(error = %e, "change kept in memory but not saved");
            return Err(RosterError::Unsaved(e));
        }
        self.dirty = false;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Changes
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a record and save.
    pub fn add(&mut self, record: Record) -> Result<()> {
        self.store.add(record)?;
        self.write_through()
    }

    /// Replace the record matching `old_roll_no` and save.
    pub fn update(&mut self, old_roll_no: &str, record: Record) -> Result<()> {
        self.store.update(old_roll_no, record)?;
        self.write_through()
    }

    /// Delete the record matching `roll_no`.
    ///
    /// Saves only if something was removed. Returns whether it was.
    pub fn delete(&mut self, roll_no: &str) -> Result<bool> {
        if !self.store.delete(roll_no) {
            return Ok(false);
        }
        self.write_through()?;
        Ok(true)
    }

    /// Reorder the records by `field` and save the new order.
    pub fn sort_by(&mut self, field: LookupField) -> Result<()> {
        self.store.sort_by(field);
        self.write_through()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Records whose `field` contains `query`, ignoring case.
    ///
    /// The query is trimmed first; a blank query is rejected.
    pub fn search(&self, field: LookupField, query: &str) -> Result<Vec<Record>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RosterError::EmptyQuery);
        }
        Ok(self.store.search(field, query))
    }

    /// All records in current order.
    pub fn all(&self) -> &[Record] {
        self.store.all()
    }

    /// Get the record matching `roll_no`, ignoring case.
    pub fn get(&self, roll_no: &str) -> Option<&Record> {
        self.store.get(roll_no)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
