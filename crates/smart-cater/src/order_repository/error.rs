//! Error types for the order repository.

use crate::model::OrderId;
use snapshot_store::StoreError;
use thiserror::Error;

/// Errors that can occur during order storage and lookup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order with this id is held in memory.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// An order with this id is already stored.
    #[error("Order already exists: {0}")]
    AlreadyExists(OrderId),

    /// The snapshot could not be produced or the store rejected it.
    #[error("Order storage error: {0}")]
    Storage(#[from] StoreError),
}
