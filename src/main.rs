use anyhow::{Context, Result};
use clap::Parser;
use resume_gap::cli::{handle_command, Cli};
use resume_gap::core::ConfigManager;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{error, info};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file)
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = ConfigManager::load(cli.overrides())?;
    info!("Analysis endpoint: {}", config.service.analyze_url());

    if let Err(e) = handle_command(cli.command, config).await {
        error!("Command failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
