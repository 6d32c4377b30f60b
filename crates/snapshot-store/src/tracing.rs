//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber.
//!
//! ## Configuration
//!
//! - **Filtering** via `RUST_LOG` (defaults to `warn` when unset)
//! - **Compact format** with the module prefix hidden (`with_target(false)`)
//! - **stderr output**, so log lines never interleave with an interactive
//!   session on stdout
//!
//! ```bash
//! # Show every append, rewrite and replay
//! RUST_LOG=debug cargo run -p smart-cater -- --demo
//!
//! # Only this crate
//! RUST_LOG=snapshot_store=debug cargo run -p smart-cater
//! ```
//!
//! With `RUST_LOG=info` an order placement reads:
//!
//! ```text
//! INFO order_ingredients: Appended size=1
//! INFO order_ingredients: Stored order_id=ORD-0001 size=1
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
