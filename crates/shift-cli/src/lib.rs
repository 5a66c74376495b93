//! Shift CLI library.
//!
//! This crate provides the CLI interface for the shift engine: it reads time
//! logs from JSON files, takes schedules from configuration, and renders
//! composed shifts.

mod cli;
pub mod commands;
mod config;
mod logs;
mod schedule;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use logs::load_logs;
pub use schedule::WeeklySchedule;
