//! Error types for the catering service.

use crate::model::OrderId;
use crate::order_repository::OrderError;
use thiserror::Error;

/// Errors that can occur while managing the catalog or placing orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The requested meal is not in the catalog.
    #[error("Meal with ID '{0}' not found")]
    MealNotFound(String),

    /// A meal with the same id is already in the catalog.
    #[error("Meal already exists: {0}")]
    DuplicateMeal(String),

    /// Every order id has been issued.
    #[error("No order ids left after {0}")]
    OrderIdsExhausted(OrderId),

    /// The order repository refused the operation.
    #[error(transparent)]
    Order(#[from] OrderError),
}
