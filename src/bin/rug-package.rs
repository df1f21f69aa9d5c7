use anyhow::Result;
use clap::Parser;
use rug_package::cli::{resolve_config, run_command, RugPackageCli};
use rug_package::modules::system::package_managers::RugPackageManager;
use std::str::FromStr;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = RugPackageCli::parse();
    let config = resolve_config(&cli)?;

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::from_str(&config.log_level).unwrap_or(tracing::Level::INFO)
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting rug-package v{}", env!("CARGO_PKG_VERSION"));
    debug!("Using rug binary {}", config.binary);

    let manager = RugPackageManager::from_config(&config);
    if !cli.command.is_dry_run() {
        manager.ensure_available()?;
    }

    run_command(&manager, &cli.command).await
}
