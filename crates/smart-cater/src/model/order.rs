//! Ingredient orders and their snapshot form.
//!
//! # Persistence
//! An [`Order`] is never written directly. The repository converts it into an
//! [`OrderSnapshot`] (which implements [`Snapshot`]) and hands that to the
//! snapshot store; recovery runs the conversion in reverse.

use crate::model::Meal;
use serde::{Deserialize, Serialize};
use snapshot_store::Snapshot;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

/// Status given to every freshly placed order.
pub const DEFAULT_STATUS: &str = "pending";

const ORDER_ID_PREFIX: &str = "ORD-";

/// Type-safe identifier for Orders, displayed as `ORD-0001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(pub u32);

impl OrderId {
    /// The numeric sequence behind the identifier.
    pub fn sequence(&self) -> u32 {
        self.0
    }
}

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", ORDER_ID_PREFIX, self.0)
    }
}

/// The text was not a canonical `ORD-0001` style identifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid order id: {0}")]
pub struct ParseOrderIdError(pub String);

impl FromStr for OrderId {
    type Err = ParseOrderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ORDER_ID_PREFIX)
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| ParseOrderIdError(s.to_string()))?;
        let id = digits
            .parse()
            .map(Self)
            .map_err(|_| ParseOrderIdError(s.to_string()))?;
        // Only the padding Display produces; `ORD-1` and `ORD-00001` are other keys.
        if id.sequence() == 0 || id.to_string() != s {
            return Err(ParseOrderIdError(s.to_string()));
        }
        Ok(id)
    }
}

impl TryFrom<String> for OrderId {
    type Error = ParseOrderIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

/// An ingredient order placed against one catalog meal.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: OrderId,
    pub meal: Arc<Meal>,
    pub customer_name: String,
    pub delivery_date: String,
    pub status: String,
    pub created_at: String,
}

impl Order {
    /// Creates a new Order.
    ///
    /// # Arguments
    /// * `order_id` - Identifier minted by the service
    /// * `meal` - The catalog meal being ordered (shared)
    /// * `customer_name` - Who placed the order
    /// * `delivery_date` - Requested delivery date, `YYYY-MM-DD`
    ///
    /// # Notes
    /// The order starts in status [`DEFAULT_STATUS`] and `created_at` is taken
    /// from the local clock.
    pub fn new(
        order_id: OrderId,
        meal: Arc<Meal>,
        customer_name: impl Into<String>,
        delivery_date: impl Into<String>,
    ) -> Self {
        Self {
            order_id,
            meal,
            customer_name: customer_name.into(),
            delivery_date: delivery_date.into(),
            status: DEFAULT_STATUS.to_string(),
            created_at: now_timestamp(),
        }
    }
}

/// Local time as an ISO-8601 string with microseconds, e.g.
/// `2025-01-15T09:30:12.123456`.
pub fn now_timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// The serialized form of an [`Order`].
///
/// `status` falls back to [`DEFAULT_STATUS`] and `created_at` may be absent;
/// converting a snapshot without one stamps the current time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub order_id: OrderId,
    pub meal: Meal,
    pub customer_name: String,
    pub delivery_date: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Snapshot for OrderSnapshot {
    const KIND: &'static str = "Order";

    fn key(&self) -> String {
        self.order_id.to_string()
    }
}

impl From<&Order> for OrderSnapshot {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id,
            meal: order.meal.as_ref().clone(),
            customer_name: order.customer_name.clone(),
            delivery_date: order.delivery_date.clone(),
            status: order.status.clone(),
            created_at: Some(order.created_at.clone()),
        }
    }
}

impl From<OrderSnapshot> for Order {
    fn from(snapshot: OrderSnapshot) -> Self {
        Self {
            order_id: snapshot.order_id,
            meal: Arc::new(snapshot.meal),
            customer_name: snapshot.customer_name,
            delivery_date: snapshot.delivery_date,
            status: snapshot.status,
            created_at: snapshot.created_at.unwrap_or_else(now_timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pasta() -> Arc<Meal> {
        Arc::new(Meal::new(
            "M001",
            "Vegan Pasta",
            ["pasta", "tomatoes", "basil", "olive oil"],
            "vegan",
        ))
    }

    #[test]
    fn order_id_formats_with_four_digits() {
        assert_eq!(OrderId(1).to_string(), "ORD-0001");
        assert_eq!(OrderId(42).to_string(), "ORD-0042");
        assert_eq!(OrderId(12345).to_string(), "ORD-12345");
    }

    #[test]
    fn order_id_parses_its_own_format() {
        assert_eq!("ORD-0007".parse::<OrderId>(), Ok(OrderId(7)));
        assert_eq!("ORD-12345".parse::<OrderId>(), Ok(OrderId(12345)));
    }

    #[test]
    fn order_id_rejects_other_shapes() {
        for bad in [
            "", "ORD-", "ord-0001", "ORD-12a", "0001", "ORD--1", "ORD-1", "ORD-01", "ORD-00001",
            "ORD-0000", "ORD-012345",
        ] {
            assert!(bad.parse::<OrderId>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn snapshot_with_unpadded_id_is_rejected() {
        let result = serde_json::from_value::<OrderSnapshot>(json!({
            "order_id": "ORD-7",
            "meal": {"meal_id": "M001", "name": "Vegan Pasta", "ingredients": ["pasta"]},
            "customer_name": "Bob",
            "delivery_date": "2025-02-01"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn new_order_is_pending_with_timestamp() {
        let order = Order::new(OrderId(1), pasta(), "Alice", "2025-01-15");
        assert_eq!(order.status, DEFAULT_STATUS);
        let parsed =
            chrono::NaiveDateTime::parse_from_str(&order.created_at, "%Y-%m-%dT%H:%M:%S%.f");
        assert!(parsed.is_ok(), "bad timestamp {}", order.created_at);
    }

    #[test]
    fn snapshot_round_trip_preserves_fields() {
        let mut order = Order::new(OrderId(3), pasta(), "Alice", "2025-01-15");
        order.status = "confirmed".into();

        let body = serde_json::to_value(OrderSnapshot::from(&order)).unwrap();
        assert_eq!(body["order_id"], "ORD-0003");
        assert_eq!(body["meal"]["category"], "vegan");

        let decoded: OrderSnapshot = serde_json::from_value(body).unwrap();
        assert_eq!(Order::from(decoded), order);
    }

    #[test]
    fn snapshot_without_timestamp_or_status_gets_defaults() {
        let snapshot: OrderSnapshot = serde_json::from_value(json!({
            "order_id": "ORD-0009",
            "meal": {"meal_id": "M001", "name": "Vegan Pasta", "ingredients": ["pasta"]},
            "customer_name": "Bob",
            "delivery_date": "2025-02-01"
        }))
        .unwrap();
        assert_eq!(snapshot.status, DEFAULT_STATUS);
        assert_eq!(snapshot.meal.category, "general");

        let order = Order::from(snapshot);
        assert!(!order.created_at.is_empty());
    }
}
