//! # The Store Capability
//!
//! This module defines the contract between a repository and whatever keeps its
//! snapshots. A repository never touches the backend directly: it encodes a typed
//! value into a [`Record`], hands the record to a [`SnapshotStore`], and decodes
//! records back when it needs to rebuild its in-memory state.
//!
//! ## Key Types
//!
//! - [`Snapshot`]: implemented by every value that can be persisted.
//! - [`Record`]: one keyed JSON body, the unit a backend stores.
//! - [`SnapshotStore`]: the append / rewrite / replay capability.
//!
//! Swapping the in-memory backend for a file or database backend means writing a
//! new [`SnapshotStore`] impl; nothing above the repository changes.

use crate::error::StoreError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A value that can be written to and read back from a [`SnapshotStore`].
///
/// The key is what [`SnapshotStore::rewrite`] matches on, so it must be stable
/// for the lifetime of the value.
pub trait Snapshot: Serialize + DeserializeOwned {
    /// Short name used in log lines (e.g. `"Order"`).
    const KIND: &'static str;

    /// The record key for this value.
    fn key(&self) -> String;
}

/// One keyed, serialized snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub body: Value,
}

impl Record {
    pub fn new(key: impl Into<String>, body: Value) -> Self {
        Self {
            key: key.into(),
            body,
        }
    }

    /// Encodes a typed value into a record keyed by [`Snapshot::key`].
    pub fn encode<T: Snapshot>(value: &T) -> Result<Self, StoreError> {
        let key = value.key();
        let body = serde_json::to_value(value).map_err(|e| StoreError::Encode {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { key, body })
    }

    /// Decodes the body back into a typed value.
    ///
    /// The body is cloned so a failed decode leaves the record usable for
    /// diagnostics.
    pub fn decode<T: Snapshot>(&self) -> Result<T, StoreError> {
        serde_json::from_value(self.body.clone()).map_err(|e| StoreError::Decode {
            key: self.key.clone(),
            reason: e.to_string(),
        })
    }
}

/// The "durable append / durable replay" capability.
///
/// # Async
/// Operations are `async` so a backend can perform real I/O. The in-memory
/// backend completes every call immediately.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Appends one record after all existing ones.
    async fn append(&mut self, record: Record) -> Result<(), StoreError>;

    /// Replaces the body of every record stored under `key`.
    ///
    /// Returns the number of records rewritten (zero when the key is unknown).
    async fn rewrite(&mut self, key: &str, body: Value) -> Result<usize, StoreError>;

    /// Returns every record in append order.
    ///
    /// The returned vector is a copy; mutating it never changes the store.
    async fn replay(&self) -> Result<Vec<Record>, StoreError>;
}
