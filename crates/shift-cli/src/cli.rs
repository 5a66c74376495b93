//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Work shift calculator.
///
/// Reads clock-in/clock-out records, works out which belong to a date's
/// shift, and reports worked and paused time.
#[derive(Debug, Parser)]
#[command(name = "shift", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compose the shift for one employee on one date.
    Compose {
        /// Employee whose logs to use.
        #[arg(long)]
        employee: String,

        /// Shift date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,

        /// JSON (array or one object per line) file of time logs.
        #[arg(long)]
        logs: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compose every shift in an inclusive date range.
    Report {
        /// Employee whose logs to use.
        #[arg(long)]
        employee: String,

        /// First date (YYYY-MM-DD).
        #[arg(long)]
        from: NaiveDate,

        /// Last date (YYYY-MM-DD), inclusive.
        #[arg(long)]
        to: NaiveDate,

        /// JSON (array or one object per line) file of time logs.
        #[arg(long)]
        logs: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the shift window that applies on a date.
    Window {
        /// Date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,

        /// Employee to resolve the schedule for.
        #[arg(long, default_value = "default")]
        employee: String,
    },
}
