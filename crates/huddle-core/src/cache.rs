//! Caching decorator for record sources.
//!
//! Wraps any [`RecordSource`] in a lock-protected memoized cell. The first
//! `records` call loads from the inner source; later calls serve the cached
//! collection; concurrent first calls perform at most one load between them
//! because the check and the load happen under a single lock. Every caller
//! observes the same materialized collection.

use std::sync::Mutex;

use crate::error::Result;
use crate::record::{BusyRecord, RecordSource};

/// Memoizes the inner source's record set.
///
/// Share it behind an `Arc` to serve many concurrent callers from one load.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cell: Mutex<Option<Vec<BusyRecord>>>,
}

impl<S: RecordSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cell: Mutex::new(None),
        }
    }

    /// Drop the cached collection so the next read reloads from the inner
    /// source. Does not coordinate with reads already in flight; they finish
    /// with the snapshot they started with.
    pub fn invalidate(&self) {
        *self.cell.lock().unwrap() = None;
    }
}

impl<S: RecordSource> RecordSource for CachedSource<S> {
    fn records(&self) -> Result<Vec<BusyRecord>> {
        let mut cell = self.cell.lock().unwrap();
        if let Some(records) = cell.as_ref() {
            return Ok(records.clone());
        }
        // Load while holding the lock: rivals arriving now block here and
        // find the cell filled instead of loading again. A failed load
        // leaves the cell empty so the next caller retries.
        let loaded = self.inner.records()?;
        *cell = Some(loaded.clone());
        Ok(loaded)
    }
}
