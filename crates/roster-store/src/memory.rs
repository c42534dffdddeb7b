//! In-memory implementation of the PersistenceGateway trait.
//!
//! This is primarily for testing. It goes through the same document
//! encoding as the CSV file but keeps the text in memory, and it can be told
//! to fail saves.

use std::io;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use roster_core::Record;

use crate::document::{parse_document, render_document};
use crate::error::{Result, StoreError};
use crate::traits::{Loaded, PersistenceGateway};

/// In-memory gateway.
///
/// A gateway with no document behaves like a missing file.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    inner: RwLock<MemoryGatewayInner>,
}

#[derive(Debug, Default)]
struct MemoryGatewayInner {
    /// The current document text, if any has been written.
    document: Option<String>,

    /// When set, every save fails without touching the document.
    fail_saves: bool,

    /// Number of successful saves.
    saves: usize,
}

impl MemoryGateway {
    /// Create a gateway with no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway holding `document`.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(MemoryGatewayInner {
                document: Some(document.into()),
                ..MemoryGatewayInner::default()
            }),
        }
    }

    /// The current document text.
    pub fn document(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .document
            .clone()
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_saves = fail;
    }

    /// Number of saves that succeeded.
    pub fn save_count(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .saves
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> Result<Loaded> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner
            .document
            .as_deref()
            .map(parse_document)
            .unwrap_or_default())
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.fail_saves {
            return Err(StoreError::Io {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::Other, "save failure injected"),
            });
        }
        inner.document = Some(render_document(records));
        inner.saves += 1;
        Ok(())
    }
}
