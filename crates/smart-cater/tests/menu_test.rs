use smart_cater::catalog::sample_meals;
use smart_cater::cli::demo::run_demo;
use smart_cater::cli::menu::Menu;
use smart_cater::model::OrderId;
use smart_cater::service::SmartCaterService;

fn sample_service() -> SmartCaterService {
    let mut service = SmartCaterService::new();
    for meal in sample_meals() {
        service.add_meal(meal).unwrap();
    }
    service
}

async fn run_session(service: &mut SmartCaterService, script: &str) -> String {
    let mut output = Vec::new();
    Menu::new(service, script.as_bytes(), &mut output)
        .run()
        .await
        .expect("session should not fail");
    String::from_utf8(output).unwrap()
}

/// Place an order, list it, view it, then exit.
#[tokio::test]
async fn test_place_and_view_order() {
    let mut service = sample_service();
    let script = "1\n2\nm001\nAlice\n2025-01-15\nyes\n3\nAlice\n4\nord-0001\n4\nORD-0009\n9\n5\n";

    let output = run_session(&mut service, script).await;

    assert!(output.contains("[M005] Vegetable Stir Fry"));
    assert!(output.contains("Selected: Vegan Pasta"));
    assert!(output.contains("✓ Order ORD-0001 placed successfully!"));
    assert!(output.contains("Order ID: ORD-0001"));
    assert!(output.contains("Order Details: ORD-0001"));
    assert!(output.contains("Order ORD-0009 not found."));
    assert!(output.contains("Invalid choice. Please enter a number between 1 and 5."));
    assert!(output.ends_with("Thank you for using SmartCater! Goodbye!\n"));

    let order = service.order_repository().get_order(&OrderId(1)).unwrap();
    assert_eq!(order.customer_name, "Alice");
    assert_eq!(order.delivery_date, "2025-01-15");
}

/// Bad answers are re-asked; declining the summary places nothing.
#[tokio::test]
async fn test_retries_and_decline() {
    let mut service = sample_service();
    let script = "2\nM999\nM002\n\nBob\nsoon\n2025-13-01\n2025-01-16\nno\n3\nBob\n5\n";

    let output = run_session(&mut service, script).await;

    assert!(output.contains("Invalid meal ID. Please try again."));
    assert!(output.contains("Name cannot be empty. Please enter your name."));
    assert!(output.contains("Invalid input. Please enter a date (YYYY-MM-DD), 'today', or 'tomorrow'."));
    assert!(output.contains("Invalid date format. Please use YYYY-MM-DD format."));
    assert!(output.contains("Order cancelled."));
    assert!(output.contains("No orders found for Bob."));
    assert!(service.order_repository().is_empty());
}

/// Running out of input mid-order ends the session without an order.
#[tokio::test]
async fn test_end_of_input_exits_cleanly() {
    let mut service = sample_service();

    let output = run_session(&mut service, "2\nM001\nAlice\n").await;

    assert!(output.contains("Selected: Vegan Pasta"));
    assert!(!output.contains("Goodbye"));
    assert!(service.order_repository().is_empty());
}

/// Only the exact `ORD-0001` spelling finds the first order.
#[tokio::test]
async fn test_view_details_needs_exact_id() {
    let mut service = sample_service();
    service
        .order_ingredients("M001", "Alice", "2025-01-15")
        .await
        .unwrap();

    let output = run_session(&mut service, "4\nORD-1\n4\nORD-00001\n5\n").await;

    assert!(output.contains("Order ORD-1 not found."));
    assert!(output.contains("Order ORD-00001 not found."));
    assert!(!output.contains("Order Details: ORD-0001"));
}

#[tokio::test]
async fn test_cancel_returns_to_menu() {
    let mut service = sample_service();

    let output = run_session(&mut service, "2\ncancel\n5\n").await;

    assert_eq!(output.matches("1. Browse available meals").count(), 2);
    assert!(service.order_repository().is_empty());
}

/// The scripted demo places three orders and recovers all of them.
#[tokio::test]
async fn test_demo_recovers_every_order() {
    let mut service = sample_service();
    let mut output = Vec::new();

    run_demo(&mut service, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("✓ Order ORD-0003 created successfully!"));
    assert!(output.contains("Orders for Alice:"));
    assert!(output.contains("Persistent state: Orders saved: 3"));
    assert!(output.contains("After crash: Orders in memory: 0"));
    assert!(output.contains("✓ Recovered 3 orders from persistent state"));
    assert!(output.contains("  ✓ ORD-0002: Chicken Curry for Bob"));
    assert_eq!(service.order_repository().len(), 3);
    assert_eq!(service.peek_next_order_id(), OrderId(4));
}
