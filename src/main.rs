//! Rewind Tic-Tac-Toe - terminal game with a rewindable move history.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rewind_tictactoe::{AppConfig, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_logging(&config)?;
    info!(?config, "Configuration resolved");

    tui::run_tui(&config)
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
