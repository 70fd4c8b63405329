//! Command-line interface for rewind_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a move history you can rewind.
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
