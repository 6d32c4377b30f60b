//! # Scripted Demonstration
//!
//! Walks through the whole lifecycle against whatever catalog the service
//! holds: list meals, place three orders, show details and history, then
//! clear the in-memory orders and recover them from the snapshot store.
//!
//! The "crash" is a same-process clear-and-replay. It shows the recovery path,
//! not durability across restarts.

use crate::cli::CliError;
use crate::model::OrderId;
use crate::service::{ServiceError, SmartCaterService};
use snapshot_store::SnapshotStore;
use std::io::Write;
use tracing::{info, info_span, Instrument};

const WIDE_RULE: usize = 70;

/// (meal, customer, delivery date) for each scripted order.
const SCRIPTED_ORDERS: [(&str, &str, &str); 3] = [
    ("M001", "Alice", "2025-01-15"),
    ("M002", "Bob", "2025-01-16"),
    ("M003", "Alice", "2025-01-15"),
];

fn heading<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    let rule = "=".repeat(WIDE_RULE);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{rule}")
}

pub async fn run_demo<S, W>(
    service: &mut SmartCaterService<S>,
    out: &mut W,
) -> Result<(), CliError>
where
    S: SnapshotStore,
    W: Write,
{
    let rule = "=".repeat(WIDE_RULE);
    let thin = "-".repeat(WIDE_RULE);

    writeln!(out, "{rule}")?;
    writeln!(out, "SmartCater - Ingredient Ordering Service Demo")?;
    writeln!(out, "{rule}")?;

    writeln!(out, "\nStep 1: Catalog")?;
    writeln!(out, "✓ Loaded {} meals\n", service.list_meals().len())?;

    writeln!(out, "Step 2: Available Meals:")?;
    writeln!(out, "{thin}")?;
    for meal in service.list_meals() {
        writeln!(out, "  [{}] {} ({})", meal.meal_id, meal.name, meal.category)?;
        writeln!(out, "      Ingredients: {}", meal.ingredient_list())?;
    }

    writeln!(out, "\nStep 3: Placing Orders...")?;
    writeln!(out, "{thin}")?;
    let mut placed: Vec<OrderId> = Vec::new();
    for (meal_id, customer, date) in SCRIPTED_ORDERS {
        writeln!(out, "\nCustomer '{customer}' orders ingredients for {meal_id}")?;
        let result = service
            .order_ingredients(meal_id, customer, date)
            .instrument(info_span!("demo_order"))
            .await;
        match result {
            Ok(order) => {
                writeln!(out, "✓ Order {} created successfully!", order.order_id)?;
                placed.push(order.order_id);
            }
            Err(e) => writeln!(out, "✗ {e}")?,
        }
    }

    heading(out, "Step 4: Viewing Order Details")?;
    for order_id in placed.iter().take(2) {
        writeln!(out, "\n{}", service.view_order(order_id))?;
    }

    heading(out, "Step 5: Customer Order History")?;
    write!(out, "\n{}", service.list_customer_orders("Alice"))?;

    heading(out, "Step 6: Demonstrating Data Persistence")?;
    writeln!(out, "Simulating system crash and recovery...")?;
    let saved = service
        .order_repository()
        .get_persistent_state()
        .await
        .map_err(ServiceError::from)?
        .len();
    writeln!(out, "Before crash: Orders in memory: {}", service.order_repository().len())?;
    writeln!(out, "Persistent state: Orders saved: {saved}")?;

    writeln!(out, "\n[SYSTEM CRASH SIMULATED - In-memory data cleared]")?;
    service.order_repository_mut().clear_in_memory();
    writeln!(out, "After crash: Orders in memory: {}", service.order_repository().len())?;

    writeln!(out, "\nRecovering orders from persistent storage...")?;
    let report = service.recover().await?;
    info!(recovered = report.recovered, skipped = report.skipped, "Demo recovery finished");
    writeln!(out, "✓ Recovered {} orders from persistent state", report.recovered)?;
    writeln!(out, "After recovery: Orders in memory: {}", service.order_repository().len())?;

    writeln!(out, "\nVerifying recovered orders:")?;
    for order in service.order_repository().get_all_orders() {
        writeln!(
            out,
            "  ✓ {}: {} for {}",
            order.order_id, order.meal.name, order.customer_name
        )?;
    }

    heading(out, "Demo completed successfully!")?;
    Ok(())
}
