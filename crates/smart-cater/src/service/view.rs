//! Fixed-layout text renderings of orders.

use crate::model::Order;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Full details of one order, framed by `=` rules.
pub fn render_order(order: &Order) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Order Details: {}", order.order_id);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Customer: {}", order.customer_name);
    let _ = writeln!(out, "Meal: {}", order.meal.name);
    let _ = writeln!(out, "Ingredients: {}", order.meal.ingredient_list());
    let _ = writeln!(out, "Delivery Date: {}", order.delivery_date);
    let _ = writeln!(out, "Status: {}", order.status);
    let _ = writeln!(out, "Created: {}", order.created_at);
    let _ = writeln!(out, "{rule}");
    out
}

/// One summary line per order, headed by the customer name.
pub fn render_customer_orders(customer_name: &str, orders: &[&Order]) -> String {
    if orders.is_empty() {
        return format!("No orders found for {customer_name}.\n");
    }
    let mut out = format!("Orders for {customer_name}:\n");
    for order in orders {
        let _ = writeln!(
            out,
            "  - {}: {} (Status: {}, Delivery: {})",
            order.order_id, order.meal.name, order.status, order.delivery_date
        );
    }
    out
}
