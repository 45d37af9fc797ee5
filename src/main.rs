//! # BD - Sprint Burndown Tracker
//!
//! A command-line sprint burndown tool with an interactive terminal user
//! interface (TUI).
//!
//! ## Key Features
//!
//! - **Sprint Range**: Pick start and end dates from a calendar; task rows resize with the sprint
//! - **Per-Day Points**: Enter points for each task on each sprint day
//! - **Ideal Burndown**: A straight-line ideal row derived from each task's peak points
//! - **Task Status**: Open, In Development, Review, Done
//! - **Scriptable Output**: Print the table or a JSON snapshot from command-line arguments
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the TUI for a two-week sprint starting today
//! bd ui
//!
//! # Pick the dates up front
//! bd ui --start 2026-10-19 --end 2026-10-30
//!
//! # Print a table without the TUI
//! bd table --start 2026-10-19 --end "in 2w" --task "Login=5,3,0@review" --task "Docs=2"
//! ```
//!
//! Task data lives only for the session. Defaults come from
//! `<config_dir>/burndown/config.toml`; logs go to `$TMPDIR/burndown.log`.

use std::path::Path;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod sprint;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod date_picker;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            Config::default()
        }
    };

    let level = cli.log_level.clone().unwrap_or_else(|| config.log.level.clone());
    let log_file = cli.log_file.clone().or_else(|| config.log.file.clone());
    let log_guard = init_logging(&level, log_file.as_deref());

    let result = match cli.command {
        Commands::Ui { start, end } => cmd_ui(&config, start, end),
        Commands::Table { start, end, tasks, json } => cmd_table(&config, start, end, tasks, json),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
        drop(log_guard);
        std::process::exit(1);
    }
}

/// Initialize file-based logging.
///
/// Logs never go to stdout: the TUI owns the terminal and `table` owns the
/// output stream. The returned guard must be held until exit so buffered
/// entries are flushed. A log file that cannot be opened is reported on
/// stderr and the program runs without logging.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("burndown.log");
    let log_path = file_path.unwrap_or(&default_path);

    let file_appender = match open_log_appender(log_path) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open {}: {e}", log_path.display());
            return None;
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Open a non-rotating appender writing to exactly `log_path`.
fn open_log_appender(log_path: &Path) -> anyhow::Result<RollingFileAppender> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("not a file path"))?;
    let log_dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    Ok(RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)?)
}
