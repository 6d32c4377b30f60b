//! # Command-Line Front End
//!
//! ```text
//! smart-cater [--demo] [--catalog <PATH>]
//! ```
//!
//! ## Configuration
//!
//! - `--demo` - run the scripted demonstration and exit
//! - `--catalog <PATH>` / `SMART_CATER_CATALOG` - load meals from a JSON file
//!   instead of the built-in samples
//! - `RUST_LOG` - log filter (logs go to stderr)

pub mod dates;
pub mod demo;
pub mod error;
pub mod menu;

pub use error::CliError;

use crate::catalog::{load_catalog, sample_meals};
use crate::service::SmartCaterService;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// SmartCater - order the ingredients for a meal.
#[derive(Debug, Parser)]
#[command(name = "smart-cater")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run the scripted demonstration instead of the interactive menu.
    #[arg(long)]
    pub demo: bool,

    /// JSON meal catalog to load instead of the built-in samples.
    #[arg(long, env = "SMART_CATER_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> AppConfig {
        AppConfig {
            mode: if self.demo { Mode::Demo } else { Mode::Interactive },
            catalog: self.catalog.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Demo,
    Interactive,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: Mode,
    pub catalog: Option<PathBuf>,
}

/// Builds a service whose catalog comes from `config`.
///
/// An unreadable or malformed catalog file is logged and treated as an empty
/// catalog; the process keeps running.
pub fn build_service(config: &AppConfig) -> SmartCaterService {
    let meals = match &config.catalog {
        Some(path) => load_catalog(path).unwrap_or_else(|e| {
            error!(path = %path.display(), error = %e, "Catalog unavailable, starting empty");
            Vec::new()
        }),
        None => sample_meals(),
    };

    let mut service = SmartCaterService::new();
    for meal in meals {
        // The first entry wins.
        if let Err(e) = service.add_meal(meal) {
            debug!(error = %e, "Catalog entry skipped");
        }
    }
    info!(meals = service.list_meals().len(), "Catalog loaded");
    service
}

/// Runs the selected mode against stdin/stdout.
pub async fn run(config: AppConfig) -> Result<(), CliError> {
    let mut service = build_service(&config);
    match config.mode {
        Mode::Demo => demo::run_demo(&mut service, &mut std::io::stdout()).await,
        Mode::Interactive => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            menu::Menu::new(&mut service, input, std::io::stdout())
                .run()
                .await
        }
    }
}
