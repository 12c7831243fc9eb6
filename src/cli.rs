//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `smart-todo`.
#[derive(Debug, Parser)]
#[command(name = "smart-todo", version, about = "Track tasks, deadlines and a completion forecast")]
pub struct Cli {
    /// YAML config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Working days elapsed, used for the completion forecast.
    #[arg(long, global = true, value_name = "DAYS")]
    pub days_worked: Option<u32>,

    /// The command to execute; defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive task menu.
    Run,
    /// Print a one-off completion forecast.
    Predict {
        /// Total number of tasks.
        #[arg(long)]
        total: usize,
        /// Number of completed tasks.
        #[arg(long)]
        completed: usize,
    },
}
