//! # Snapshot Store
//!
//! A small persistence seam for in-process repositories. A repository keeps its
//! live state in memory and mirrors every change into a [`SnapshotStore`] as a
//! keyed JSON [`Record`]. After its memory is lost, it rebuilds itself by
//! replaying those records.
//!
//! ## Architecture Overview
//!
//! 1. **Value Layer** ([`Snapshot`]) - what gets persisted and under which key
//! 2. **Record Layer** ([`Record`]) - the serialized unit a backend stores
//! 3. **Backend Layer** ([`SnapshotStore`]) - append, rewrite and replay
//!
//! ## Backends
//!
//! - [`InMemorySnapshotStore`] - a vector owned by the process (the default)
//! - [`mock::MockSnapshotStore`] - scripted expectations for failure tests
//!
//! ## Usage
//!
//! ```rust
//! use snapshot_store::{InMemorySnapshotStore, Record, Snapshot, SnapshotStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Ticket { id: String, seat: u32 }
//!
//! impl Snapshot for Ticket {
//!     const KIND: &'static str = "Ticket";
//!     fn key(&self) -> String { self.id.clone() }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut store = InMemorySnapshotStore::new();
//!     let ticket = Ticket { id: "T1".into(), seat: 12 };
//!
//!     store.append(Record::encode(&ticket).unwrap()).await.unwrap();
//!
//!     let replayed: Vec<Ticket> = store
//!         .replay()
//!         .await
//!         .unwrap()
//!         .iter()
//!         .map(|r| r.decode().unwrap())
//!         .collect();
//!     assert_eq!(replayed, vec![ticket]);
//! }
//! ```

pub mod error;
pub mod memory;
pub mod mock;
pub mod store;
pub mod tracing;

pub use error::StoreError;
pub use memory::InMemorySnapshotStore;
pub use store::{Record, Snapshot, SnapshotStore};
