//! # Order Repository
//!
//! Keyed storage for [`Order`]s, mirrored into a [`SnapshotStore`].
//!
//! ## Write Path
//!
//! Every write produces the snapshot first, hands it to the store second, and
//! touches the in-memory map last. A failure at either of the first two steps
//! returns an error and leaves the map exactly as it was.
//!
//! ## Recovery
//!
//! [`OrderRepository::recover_from_persistent_state`] replays every record in the
//! store. Records that decode are upserted into the map; records that do not are
//! logged and skipped. Recovery never rolls back what it already restored.
//!
//! ```rust
//! use smart_cater::model::{Meal, Order, OrderId};
//! use smart_cater::order_repository::OrderRepository;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let meal = Arc::new(Meal::new("M001", "Vegan Pasta", ["pasta"], "vegan"));
//!     let mut repo = OrderRepository::new();
//!     repo.add_order(Order::new(OrderId(1), meal, "Alice", "2025-01-15")).await.unwrap();
//!
//!     repo.clear_in_memory();
//!     let report = repo.recover_from_persistent_state().await.unwrap();
//!     assert_eq!(report.recovered, 1);
//!     assert!(repo.get_order(&OrderId(1)).is_some());
//! }
//! ```

pub mod error;

pub use error::*;

use crate::model::{Order, OrderId, OrderSnapshot};
use snapshot_store::{InMemorySnapshotStore, Record, Snapshot, SnapshotStore};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Outcome of replaying the snapshot store into memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryReport {
    /// Records decoded and restored into the map.
    pub recovered: usize,
    /// Records that failed to decode and were left out.
    pub skipped: usize,
}

/// Orders by id, in insertion order, backed by a snapshot store.
pub struct OrderRepository<S = InMemorySnapshotStore> {
    orders: HashMap<OrderId, Order>,
    insertion_order: Vec<OrderId>,
    store: S,
}

impl OrderRepository<InMemorySnapshotStore> {
    /// Creates a repository over an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(InMemorySnapshotStore::new())
    }
}

impl Default for OrderRepository<InMemorySnapshotStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SnapshotStore> OrderRepository<S> {
    /// Creates an empty repository over `store`.
    ///
    /// Records already in the store are not loaded until
    /// [`recover_from_persistent_state`](Self::recover_from_persistent_state) runs.
    pub fn with_store(store: S) -> Self {
        Self {
            orders: HashMap::new(),
            insertion_order: Vec::new(),
            store,
        }
    }

    /// Stores a new order and appends its snapshot.
    ///
    /// # Errors
    /// - [`OrderError::AlreadyExists`] if the id is already held.
    /// - [`OrderError::Storage`] if the snapshot cannot be encoded or appended.
    ///
    /// In both cases the in-memory map is unchanged.
    pub async fn add_order(&mut self, order: Order) -> Result<(), OrderError> {
        let id = order.order_id;
        if self.orders.contains_key(&id) {
            warn!(order_id = %id, "Duplicate order rejected");
            return Err(OrderError::AlreadyExists(id));
        }

        let record = Record::encode(&OrderSnapshot::from(&order))?;
        if let Err(e) = self.store.append(record).await {
            warn!(order_id = %id, error = %e, "Snapshot append failed");
            return Err(e.into());
        }

        self.insert(order);
        info!(order_id = %id, size = self.orders.len(), "Stored");
        Ok(())
    }

    pub fn get_order(&self, id: &OrderId) -> Option<&Order> {
        let order = self.orders.get(id);
        debug!(order_id = %id, found = order.is_some(), "Get");
        order
    }

    /// Every order, oldest first.
    pub fn get_all_orders(&self) -> Vec<&Order> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.orders.get(id))
            .collect()
    }

    /// Orders whose customer name equals `customer_name` exactly (case-sensitive),
    /// oldest first.
    pub fn get_orders_by_customer(&self, customer_name: &str) -> Vec<&Order> {
        self.get_all_orders()
            .into_iter()
            .filter(|order| order.customer_name == customer_name)
            .collect()
    }

    /// Sets the status of an order and rewrites its snapshot.
    ///
    /// # Errors
    /// - [`OrderError::NotFound`] if the id is unknown; nothing is touched.
    /// - [`OrderError::Storage`] if the snapshot rewrite fails; the in-memory
    ///   status is left unchanged.
    pub async fn update_order_status(
        &mut self,
        id: &OrderId,
        new_status: impl Into<String>,
    ) -> Result<(), OrderError> {
        let new_status = new_status.into();
        let Some(current) = self.orders.get(id) else {
            warn!(order_id = %id, "Not found");
            return Err(OrderError::NotFound(*id));
        };

        let mut snapshot = OrderSnapshot::from(current);
        snapshot.status = new_status.clone();
        let record = Record::encode(&snapshot)?;

        let rewritten = self.store.rewrite(&record.key, record.body).await?;
        if rewritten == 0 {
            warn!(order_id = %id, "No snapshot to rewrite");
        }

        if let Some(order) = self.orders.get_mut(id) {
            order.status = new_status;
            info!(order_id = %id, status = %order.status, "Status updated");
        }
        Ok(())
    }

    /// Replays every snapshot into the in-memory map.
    ///
    /// Orders already held are replaced in place; new ones are appended after
    /// them. Snapshots that fail to decode are skipped.
    ///
    /// # Errors
    /// Returns [`OrderError::Storage`] only when the store cannot replay at all.
    pub async fn recover_from_persistent_state(&mut self) -> Result<RecoveryReport, OrderError> {
        let records = self.store.replay().await?;
        let mut report = RecoveryReport::default();

        for record in records {
            match record.decode::<OrderSnapshot>() {
                Ok(snapshot) => {
                    self.insert(Order::from(snapshot));
                    report.recovered += 1;
                }
                Err(e) => {
                    warn!(kind = OrderSnapshot::KIND, key = %record.key, error = %e, "Skipping snapshot");
                    report.skipped += 1;
                }
            }
        }

        info!(
            recovered = report.recovered,
            skipped = report.skipped,
            size = self.orders.len(),
            "Recovered"
        );
        Ok(report)
    }

    /// A copy of every snapshot record, in append order.
    pub async fn get_persistent_state(&self) -> Result<Vec<Record>, OrderError> {
        Ok(self.store.replay().await?)
    }

    /// Drops every in-memory order while keeping the store intact.
    pub fn clear_in_memory(&mut self) {
        self.orders.clear();
        self.insertion_order.clear();
        info!("In-memory orders cleared");
    }

    /// Highest order id currently held in memory.
    pub fn max_order_id(&self) -> Option<OrderId> {
        self.orders.keys().max().copied()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn insert(&mut self, order: Order) {
        let id = order.order_id;
        if self.orders.insert(id, order).is_none() {
            self.insertion_order.push(id);
        }
    }
}
