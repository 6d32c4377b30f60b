//! # In-Memory Backend
//!
//! [`InMemorySnapshotStore`] keeps records in a `Vec` owned by the process. It is
//! the "shadow list": it survives a cleared repository map but not a restart.

use crate::error::StoreError;
use crate::store::{Record, SnapshotStore};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// A [`SnapshotStore`] backed by a plain vector.
///
/// Records are kept in append order and every read hands out a copy, so callers
/// can never reach the internal list through a returned value.
#[derive(Debug, Default, Clone)]
pub struct InMemorySnapshotStore {
    records: Vec<Record>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing records (e.g. to replay a captured state).
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn append(&mut self, record: Record) -> Result<(), StoreError> {
        debug!(key = %record.key, "Append");
        self.records.push(record);
        info!(size = self.records.len(), "Appended");
        Ok(())
    }

    async fn rewrite(&mut self, key: &str, body: Value) -> Result<usize, StoreError> {
        let mut rewritten = 0;
        for record in self.records.iter_mut().filter(|r| r.key == key) {
            record.body = body.clone();
            rewritten += 1;
        }
        debug!(key, rewritten, "Rewrite");
        Ok(rewritten)
    }

    async fn replay(&self) -> Result<Vec<Record>, StoreError> {
        debug!(size = self.records.len(), "Replay");
        Ok(self.records.clone())
    }
}
