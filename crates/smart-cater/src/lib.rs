//! # SmartCater
//!
//! A meal catalog and ingredient-order tracker. Customers pick a meal, give a
//! name and a delivery date, and get an order (`ORD-0001`, ...) for that meal's
//! ingredients. Every order is mirrored into a
//! [`SnapshotStore`](snapshot_store::SnapshotStore) so the in-memory state can
//! be rebuilt after it is lost.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Meal`](model::Meal), [`Order`](model::Order), the typed
//! [`OrderId`](model::OrderId) and the serialized
//! [`OrderSnapshot`](model::OrderSnapshot).
//!
//! ### 2. The Storage ([`order_repository`])
//! [`OrderRepository`](order_repository::OrderRepository) keeps orders by id and
//! writes a snapshot before every change reaches memory.
//!
//! ### 3. The Orchestrator ([`service`])
//! [`SmartCaterService`](service::SmartCaterService) owns the catalog and mints
//! order ids.
//!
//! ### 4. The Edges ([`catalog`], [`cli`])
//! JSON catalog loading, the interactive menu, and the scripted demo.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! - **Typed errors**: each layer has its own `thiserror` enum
//!   ([`OrderError`](order_repository::OrderError),
//!   [`ServiceError`](service::ServiceError),
//!   [`CatalogError`](catalog::CatalogError)); nothing panics on bad input.
//! - **Snapshot first**: a write that cannot be persisted never reaches memory.
//! - **Sequential**: one service, one caller. Store calls are `async` so a real
//!   backend can do I/O, but the binary runs on a current-thread runtime.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Scripted walk-through, with info logs on stderr
//! RUST_LOG=info cargo run -p smart-cater -- --demo
//!
//! # Interactive menu over a custom catalog
//! cargo run -p smart-cater -- --catalog meals.json
//! ```

pub mod catalog;
pub mod cli;
pub mod model;
pub mod order_repository;
pub mod service;
