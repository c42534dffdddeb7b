//! CSV file implementation of the PersistenceGateway trait.
//!
//! This is the primary backend. The whole file is read on load and
//! overwritten on save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use roster_core::Record;

use crate::document::{parse_document, render_document};
use crate::error::{Result, StoreError};
use crate::traits::{Loaded, PersistenceGateway};

/// A CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvFileGateway {
    path: PathBuf,
}

impl CsvFileGateway {
    /// Use the file at `path`. Nothing is read or created until load/save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PersistenceGateway for CsvFileGateway {
    fn load(&self) -> Result<Loaded> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no record file yet, starting empty");
                return Ok(Loaded::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let loaded = parse_document(&text);
        tracing::info!(
            path = %self.path.display(),
            rows = loaded.rows.len(),
            rejected = loaded.rejected.len(),
            "loaded record file"
        );
        Ok(loaded)
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        fs::write(&self.path, render_document(records)).map_err(|e| self.io_error(e))?;
        tracing::info!(path = %self.path.display(), records = records.len(), "saved record file");
        Ok(())
    }
}
