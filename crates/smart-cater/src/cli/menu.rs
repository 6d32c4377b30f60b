//! # Interactive Menu
//!
//! A line-oriented session over any async reader and any writer. The binary
//! wires it to stdin/stdout; tests drive it with a byte slice and a `Vec<u8>`.
//!
//! Every user mistake (unknown meal, empty name, bad date, bad choice) prints a
//! message and the session continues. End of input ends the session cleanly
//! from any prompt.

use crate::cli::dates::parse_delivery_date;
use crate::cli::CliError;
use crate::model::OrderId;
use crate::service::SmartCaterService;
use snapshot_store::SnapshotStore;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

const WIDE_RULE: usize = 70;

/// Outcome of one prompt.
enum Reply {
    Line(String),
    Eof,
}

pub struct Menu<'a, S, R, W> {
    service: &'a mut SmartCaterService<S>,
    input: R,
    output: W,
}

impl<'a, S, R, W> Menu<'a, S, R, W>
where
    S: SnapshotStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(service: &'a mut SmartCaterService<S>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub async fn run(mut self) -> Result<(), CliError> {
        self.banner()?;
        loop {
            self.print_menu()?;
            let Reply::Line(choice) = self.prompt("\nEnter your choice (1-5): ").await? else {
                break;
            };
            debug!(%choice, "Menu choice");
            match choice.as_str() {
                "1" => self.browse_meals()?,
                "2" => self.place_order().await?,
                "3" => self.view_my_orders().await?,
                "4" => self.view_order_details().await?,
                "5" => {
                    writeln!(self.output, "\nThank you for using SmartCater! Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(
                    self.output,
                    "\nInvalid choice. Please enter a number between 1 and 5."
                )?,
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn banner(&mut self) -> Result<(), CliError> {
        let rule = "=".repeat(WIDE_RULE);
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "SmartCater - Ingredient Ordering Service")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "Welcome! This interactive mode allows you to:")?;
        writeln!(self.output, "  • Browse available meals")?;
        writeln!(self.output, "  • Place orders for meal ingredients")?;
        writeln!(self.output, "  • View your order history")?;
        writeln!(self.output, "  • View detailed order information")?;
        writeln!(
            self.output,
            "\n✓ Loaded {} meals into catalog",
            self.service.list_meals().len()
        )?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        let rule = "=".repeat(WIDE_RULE);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "SmartCater - Ingredient Ordering Service")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "1. Browse available meals")?;
        writeln!(self.output, "2. Place an order")?;
        writeln!(self.output, "3. View my orders")?;
        writeln!(self.output, "4. View order details")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<(), CliError> {
        let rule = "-".repeat(WIDE_RULE);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    /// Writes `question`, then reads one trimmed line.
    async fn prompt(&mut self, question: &str) -> Result<Reply, CliError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(Reply::Eof);
        }
        Ok(Reply::Line(line.trim().to_string()))
    }

    fn browse_meals(&mut self) -> Result<(), CliError> {
        let meals = self.service.list_meals();
        if meals.is_empty() {
            writeln!(self.output, "\nNo meals available.")?;
            return Ok(());
        }

        let rule = "-".repeat(WIDE_RULE);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "Available Meals:")?;
        writeln!(self.output, "{rule}")?;
        for meal in meals {
            writeln!(self.output, "\n[{}] {}", meal.meal_id, meal.name)?;
            writeln!(self.output, "   Category: {}", meal.category)?;
            writeln!(self.output, "   Ingredients: {}", meal.ingredient_list())?;
        }
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    async fn place_order(&mut self) -> Result<(), CliError> {
        self.section("Place an Order")?;

        if self.service.list_meals().is_empty() {
            writeln!(self.output, "No meals available to order.")?;
            return Ok(());
        }
        writeln!(self.output, "\nAvailable Meals:")?;
        for meal in self.service.list_meals() {
            writeln!(self.output, "  [{}] {} ({})", meal.meal_id, meal.name, meal.category)?;
        }

        let meal_id = loop {
            let Reply::Line(raw) = self
                .prompt("\nEnter meal ID to order (or 'cancel' to go back): ")
                .await?
            else {
                return Ok(());
            };
            let meal_id = raw.to_uppercase();
            if meal_id == "CANCEL" {
                return Ok(());
            }
            match self.service.get_meal(&meal_id) {
                Some(meal) => {
                    writeln!(self.output, "\nSelected: {}", meal.name)?;
                    writeln!(self.output, "Ingredients: {}", meal.ingredient_list())?;
                    break meal_id;
                }
                None => writeln!(self.output, "Invalid meal ID. Please try again.")?,
            }
        };

        let customer_name = loop {
            let Reply::Line(name) = self.prompt("\nEnter your name: ").await? else {
                return Ok(());
            };
            if !name.is_empty() {
                break name;
            }
            writeln!(self.output, "Name cannot be empty. Please enter your name.")?;
        };

        let delivery_date = loop {
            let Reply::Line(raw) = self
                .prompt("Enter delivery date (YYYY-MM-DD) or 'today' or 'tomorrow': ")
                .await?
            else {
                return Ok(());
            };
            match parse_delivery_date(&raw, chrono::Local::now().date_naive()) {
                Ok(date) => break date,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        };

        let meal_name = self
            .service
            .get_meal(&meal_id)
            .map(|m| m.name.clone())
            .unwrap_or_default();
        writeln!(self.output, "\nOrder Summary:")?;
        writeln!(self.output, "  Meal: {meal_name}")?;
        writeln!(self.output, "  Customer: {customer_name}")?;
        writeln!(self.output, "  Delivery Date: {delivery_date}")?;

        let Reply::Line(confirm) = self.prompt("\nConfirm order? (yes/no): ").await? else {
            return Ok(());
        };
        if !matches!(confirm.to_lowercase().as_str(), "yes" | "y") {
            writeln!(self.output, "Order cancelled.")?;
            return Ok(());
        }

        match self
            .service
            .order_ingredients(&meal_id, &customer_name, &delivery_date)
            .await
        {
            Ok(order) => {
                writeln!(self.output, "\n✓ Order {} placed successfully!", order.order_id)?;
                writeln!(self.output, "\n{}", self.service.view_order(&order.order_id))?;
            }
            Err(e) => {
                warn!(error = %e, "Order placement failed");
                writeln!(self.output, "\n✗ Failed to place order: {e}")?;
            }
        }
        Ok(())
    }

    async fn view_my_orders(&mut self) -> Result<(), CliError> {
        self.section("View My Orders")?;

        let Reply::Line(customer_name) = self.prompt("Enter your name: ").await? else {
            return Ok(());
        };
        if customer_name.is_empty() {
            writeln!(self.output, "Name cannot be empty.")?;
            return Ok(());
        }

        let orders = self
            .service
            .order_repository()
            .get_orders_by_customer(&customer_name);
        if orders.is_empty() {
            writeln!(self.output, "\nNo orders found for {customer_name}.")?;
            return Ok(());
        }

        writeln!(self.output, "\nOrders for {customer_name}:")?;
        writeln!(self.output, "{}", "-".repeat(WIDE_RULE))?;
        for order in orders {
            writeln!(self.output, "\n  Order ID: {}", order.order_id)?;
            writeln!(self.output, "  Meal: {}", order.meal.name)?;
            writeln!(self.output, "  Status: {}", order.status)?;
            writeln!(self.output, "  Delivery Date: {}", order.delivery_date)?;
        }
        Ok(())
    }

    async fn view_order_details(&mut self) -> Result<(), CliError> {
        self.section("View Order Details")?;

        let Reply::Line(raw) = self.prompt("Enter order ID: ").await? else {
            return Ok(());
        };
        let raw = raw.to_uppercase();
        if raw.is_empty() {
            writeln!(self.output, "Order ID cannot be empty.")?;
            return Ok(());
        }

        match raw.parse::<OrderId>() {
            Ok(order_id) => writeln!(self.output, "\n{}", self.service.view_order(&order_id))?,
            Err(_) => writeln!(self.output, "Order {raw} not found.")?,
        }
        Ok(())
    }
}
