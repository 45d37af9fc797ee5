use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Sprint burndown tracker.
/// Task data lives only for the session; nothing is written besides the log file.
#[derive(Parser)]
#[command(name = "bd", version, about = "Sprint burndown tracking CLI and TUI")]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive (overrides the config file).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log file path (overrides the config file).
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
