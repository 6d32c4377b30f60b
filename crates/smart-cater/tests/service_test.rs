use smart_cater::catalog::sample_meals;
use smart_cater::model::{Meal, Order, OrderId, OrderSnapshot};
use smart_cater::order_repository::{OrderError, OrderRepository, RecoveryReport};
use smart_cater::service::{ServiceError, SmartCaterService};
use snapshot_store::mock::MockSnapshotStore;
use snapshot_store::{Record, StoreError};
use std::sync::Arc;

fn vegan_pasta() -> Meal {
    Meal::new(
        "M001",
        "Vegan Pasta",
        ["pasta", "tomatoes", "basil", "olive oil"],
        "vegan",
    )
}

fn sample_service() -> SmartCaterService {
    let mut service = SmartCaterService::new();
    for meal in sample_meals() {
        service.add_meal(meal).unwrap();
    }
    service
}

/// Alice orders a known meal, Bob orders one that is not in the catalog.
#[tokio::test]
async fn test_alice_and_bob_scenario() {
    let mut service = SmartCaterService::new();
    service.add_meal(vegan_pasta()).unwrap();

    let order = service
        .order_ingredients("M001", "Alice", "2025-01-15")
        .await
        .expect("Alice's order should succeed");
    assert_eq!(order.order_id.to_string(), "ORD-0001");
    assert_eq!(order.status, "pending");
    assert_eq!(order.meal.ingredients, vec!["pasta", "tomatoes", "basil", "olive oil"]);

    let bob = service.order_ingredients("M002", "Bob", "2025-01-16").await;
    assert_eq!(bob, Err(ServiceError::MealNotFound("M002".into())));

    let repo = service.order_repository();
    assert_eq!(repo.len(), 1);
    let alice: Vec<_> = repo
        .get_orders_by_customer("Alice")
        .iter()
        .map(|o| o.order_id)
        .collect();
    assert_eq!(alice, vec![OrderId(1)]);
    assert!(repo.get_orders_by_customer("Bob").is_empty());
}

/// Ids are sequential across successful calls and failures never consume one.
#[tokio::test]
async fn test_order_ids_are_sequential() {
    let mut service = sample_service();

    let mut ids = Vec::new();
    for meal_id in ["M001", "M404", "M002", "M003", "nope", "M005"] {
        if let Ok(order) = service.order_ingredients(meal_id, "Carol", "2025-03-01").await {
            ids.push(order.order_id.to_string());
        }
    }

    assert_eq!(ids, vec!["ORD-0001", "ORD-0002", "ORD-0003", "ORD-0004"]);
    assert_eq!(service.peek_next_order_id(), OrderId(5));
}

#[tokio::test]
async fn test_duplicate_meal_is_rejected() {
    let mut service = SmartCaterService::new();
    service.add_meal(vegan_pasta()).unwrap();

    let impostor = Meal::new("M001", "Impostor", ["sand"], "general");
    assert_eq!(
        service.add_meal(impostor),
        Err(ServiceError::DuplicateMeal("M001".into()))
    );
    assert_eq!(service.get_meal("M001").unwrap().name, "Vegan Pasta");
    assert_eq!(service.list_meals().len(), 1);
}

#[tokio::test]
async fn test_list_meals_keeps_catalog_order() {
    let service = sample_service();
    let ids: Vec<_> = service.list_meals().iter().map(|m| m.meal_id.clone()).collect();
    assert_eq!(ids, vec!["M001", "M002", "M003", "M004", "M005"]);
}

#[tokio::test]
async fn test_view_order_rendering() {
    let mut service = sample_service();
    let order = service
        .order_ingredients("M001", "Alice", "2025-01-15")
        .await
        .unwrap();

    let details = service.view_order(&order.order_id);
    assert!(details.contains("Order Details: ORD-0001"));
    assert!(details.contains("Customer: Alice"));
    assert!(details.contains("Meal: Vegan Pasta"));
    assert!(details.contains("Delivery Date: 2025-01-15"));

    assert_eq!(service.view_order(&OrderId(99)), "Order ORD-0099 not found.\n");
    assert_eq!(
        service.list_customer_orders("Zed"),
        "No orders found for Zed.\n"
    );
}

/// Status updates land in memory and in the snapshot list.
#[tokio::test]
async fn test_status_update_is_persisted() {
    let mut service = sample_service();
    let order = service
        .order_ingredients("M002", "Bob", "2025-01-16")
        .await
        .unwrap();

    service
        .order_repository_mut()
        .update_order_status(&order.order_id, "confirmed")
        .await
        .unwrap();

    let repo = service.order_repository();
    assert_eq!(repo.get_order(&order.order_id).unwrap().status, "confirmed");
    let state = repo.get_persistent_state().await.unwrap();
    assert_eq!(state.len(), 1);
    assert_eq!(state[0].key, "ORD-0001");
    assert_eq!(state[0].body["status"], "confirmed");

    let missing = service
        .order_repository_mut()
        .update_order_status(&OrderId(42), "confirmed")
        .await;
    assert_eq!(missing, Err(OrderError::NotFound(OrderId(42))));
}

/// Clearing memory and recovering restores identical orders.
#[tokio::test]
async fn test_crash_and_recover() {
    let mut service = sample_service();
    service.order_ingredients("M001", "Alice", "2025-01-15").await.unwrap();
    service.order_ingredients("M002", "Bob", "2025-01-16").await.unwrap();
    service.order_ingredients("M003", "Alice", "2025-01-15").await.unwrap();
    let before: Vec<_> = service
        .order_repository()
        .get_all_orders()
        .into_iter()
        .cloned()
        .collect();

    service.order_repository_mut().clear_in_memory();
    assert!(service.order_repository().is_empty());

    let report = service.recover().await.unwrap();
    assert_eq!(report, RecoveryReport { recovered: 3, skipped: 0 });

    let after: Vec<_> = service
        .order_repository()
        .get_all_orders()
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(after, before);
}

/// A service started over a populated store continues numbering after recovery.
#[tokio::test]
async fn test_recover_advances_counter() {
    let mut first = sample_service();
    first.order_ingredients("M001", "Alice", "2025-01-15").await.unwrap();
    first.order_ingredients("M002", "Bob", "2025-01-16").await.unwrap();
    let records = first.order_repository().get_persistent_state().await.unwrap();

    let store = snapshot_store::InMemorySnapshotStore::from_records(records);
    let mut second = SmartCaterService::with_repository(OrderRepository::with_store(store));
    for meal in sample_meals() {
        second.add_meal(meal).unwrap();
    }

    assert_eq!(second.recover().await.unwrap().recovered, 2);
    assert_eq!(second.peek_next_order_id(), OrderId(3));

    let next = second
        .order_ingredients("M003", "Carol", "2025-01-17")
        .await
        .unwrap();
    assert_eq!(next.order_id.to_string(), "ORD-0003");
    assert_eq!(second.order_repository().len(), 3);
}

/// A store that refuses the append fails the order without consuming its id.
#[tokio::test]
async fn test_storage_failure_does_not_consume_id() {
    let mut store = MockSnapshotStore::new();
    store
        .expect_append()
        .return_err(StoreError::Unavailable("disk full".into()));
    store.expect_append().return_ok();

    let mut service =
        SmartCaterService::with_repository(OrderRepository::with_store(store.clone()));
    service.add_meal(vegan_pasta()).unwrap();

    let failed = service.order_ingredients("M001", "Alice", "2025-01-15").await;
    assert!(matches!(
        failed,
        Err(ServiceError::Order(OrderError::Storage(StoreError::Unavailable(_))))
    ));
    assert!(service.order_repository().is_empty());

    let retried = service
        .order_ingredients("M001", "Alice", "2025-01-15")
        .await
        .unwrap();
    assert_eq!(retried.order_id, OrderId(1));
    assert_eq!(store.appended().len(), 1);
    assert_eq!(store.appended()[0].key, "ORD-0001");
    store.verify();
}

/// A store holding the last possible id recovers cleanly and then refuses new orders.
#[tokio::test]
async fn test_recover_at_id_limit_stops_issuing_ids() {
    let last = Order::new(
        OrderId(u32::MAX),
        Arc::new(vegan_pasta()),
        "Alice",
        "2025-01-15",
    );
    let record = Record::encode(&OrderSnapshot::from(&last)).unwrap();
    assert_eq!(record.key, "ORD-4294967295");

    let store = snapshot_store::InMemorySnapshotStore::from_records(vec![record]);
    let mut service = SmartCaterService::with_repository(OrderRepository::with_store(store));
    service.add_meal(vegan_pasta()).unwrap();

    assert_eq!(service.recover().await.unwrap().recovered, 1);
    assert_eq!(service.peek_next_order_id(), OrderId(u32::MAX));

    let refused = service.order_ingredients("M001", "Bob", "2025-01-16").await;
    assert_eq!(refused, Err(ServiceError::OrderIdsExhausted(OrderId(u32::MAX))));
    assert_eq!(service.order_repository().len(), 1);
}
