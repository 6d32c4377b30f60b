use clap::Parser;
use smart_cater::cli::{self, Cli, CliError};
use snapshot_store::tracing::setup_tracing;
use tracing::info;

fn main() -> Result<(), CliError> {
    setup_tracing();

    let args = Cli::parse();
    let config = args.config();
    info!(?config, "Starting SmartCater");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(cli::run(config))
}
