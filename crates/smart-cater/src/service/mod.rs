//! # Catering Service
//!
//! [`SmartCaterService`] owns the meal catalog, the order repository, and the
//! counter that mints order ids.
//!
//! ## Order Ids
//!
//! Ids are `ORD-0001`, `ORD-0002`, ... and are minted per service instance.
//! The counter only advances once the repository has stored the order, so a
//! rejected request (unknown meal, storage failure) never burns an id. After
//! [`SmartCaterService::recover`] the counter is moved past the highest
//! recovered id, so replayed orders are never shadowed by new ones.

pub mod error;
pub mod view;

pub use error::*;

use crate::model::{Meal, Order, OrderId};
use crate::order_repository::{OrderRepository, RecoveryReport};
use snapshot_store::{InMemorySnapshotStore, SnapshotStore};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct SmartCaterService<S = InMemorySnapshotStore> {
    meals: HashMap<String, Arc<Meal>>,
    catalog_order: Vec<String>,
    order_repository: OrderRepository<S>,
    next_order_id: u32,
}

impl SmartCaterService<InMemorySnapshotStore> {
    /// Creates a service with an empty catalog and an in-memory store.
    pub fn new() -> Self {
        Self::with_repository(OrderRepository::new())
    }
}

impl Default for SmartCaterService<InMemorySnapshotStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SnapshotStore> SmartCaterService<S> {
    pub fn with_repository(order_repository: OrderRepository<S>) -> Self {
        Self {
            meals: HashMap::new(),
            catalog_order: Vec::new(),
            order_repository,
            next_order_id: 1,
        }
    }

    // --- Catalog ---

    /// Adds a meal to the catalog.
    ///
    /// # Errors
    /// [`ServiceError::DuplicateMeal`] if the id is already taken; the existing
    /// entry is kept.
    pub fn add_meal(&mut self, meal: Meal) -> Result<(), ServiceError> {
        if self.meals.contains_key(&meal.meal_id) {
            warn!(meal_id = %meal.meal_id, "Duplicate meal rejected");
            return Err(ServiceError::DuplicateMeal(meal.meal_id));
        }
        debug!(meal_id = %meal.meal_id, "Meal added");
        self.catalog_order.push(meal.meal_id.clone());
        self.meals.insert(meal.meal_id.clone(), Arc::new(meal));
        Ok(())
    }

    pub fn get_meal(&self, meal_id: &str) -> Option<&Meal> {
        self.meals.get(meal_id).map(Arc::as_ref)
    }

    /// Every meal, in the order it was added.
    pub fn list_meals(&self) -> Vec<&Meal> {
        self.catalog_order
            .iter()
            .filter_map(|id| self.meals.get(id))
            .map(Arc::as_ref)
            .collect()
    }

    // --- Orders ---

    /// Places an order for the ingredients of `meal_id`.
    ///
    /// # Errors
    /// - [`ServiceError::MealNotFound`] if the meal is not in the catalog.
    /// - [`ServiceError::OrderIdsExhausted`] once the id space is used up.
    /// - [`ServiceError::Order`] if the repository could not store the order.
    ///
    /// No failure consumes an order id.
    #[instrument(skip(self))]
    pub async fn order_ingredients(
        &mut self,
        meal_id: &str,
        customer_name: &str,
        delivery_date: &str,
    ) -> Result<Order, ServiceError> {
        let Some(meal) = self.meals.get(meal_id).cloned() else {
            warn!("Meal not found");
            return Err(ServiceError::MealNotFound(meal_id.to_string()));
        };

        let order_id = OrderId(self.next_order_id);
        let Some(following) = self.next_order_id.checked_add(1) else {
            warn!(%order_id, "Order ids exhausted");
            return Err(ServiceError::OrderIdsExhausted(order_id));
        };
        let order = Order::new(order_id, meal, customer_name, delivery_date);

        if let Err(e) = self.order_repository.add_order(order.clone()).await {
            warn!(%order_id, error = %e, "Failed to create order");
            return Err(e.into());
        }

        self.next_order_id = following;
        info!(%order_id, "Order created");
        Ok(order)
    }

    /// Details of one order, or a not-found line.
    pub fn view_order(&self, order_id: &OrderId) -> String {
        match self.order_repository.get_order(order_id) {
            Some(order) => view::render_order(order),
            None => format!("Order {order_id} not found.\n"),
        }
    }

    /// A summary line for each of the customer's orders.
    pub fn list_customer_orders(&self, customer_name: &str) -> String {
        let orders = self.order_repository.get_orders_by_customer(customer_name);
        view::render_customer_orders(customer_name, &orders)
    }

    /// Replays persisted orders and moves the id counter past them.
    #[instrument(skip(self))]
    pub async fn recover(&mut self) -> Result<RecoveryReport, ServiceError> {
        let report = self.order_repository.recover_from_persistent_state().await?;
        if let Some(max) = self.order_repository.max_order_id() {
            if max.sequence() >= self.next_order_id {
                // u32::MAX is never issued, so parking the counter there blocks new orders.
                self.next_order_id = max.sequence().checked_add(1).unwrap_or(u32::MAX);
                info!(next = %OrderId(self.next_order_id), "Order counter advanced");
            }
        }
        Ok(report)
    }

    /// The id the next successful order will receive.
    pub fn peek_next_order_id(&self) -> OrderId {
        OrderId(self.next_order_id)
    }

    pub fn order_repository(&self) -> &OrderRepository<S> {
        &self.order_repository
    }

    pub fn order_repository_mut(&mut self) -> &mut OrderRepository<S> {
        &mut self.order_repository
    }
}
