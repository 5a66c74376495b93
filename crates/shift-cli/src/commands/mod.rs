//! CLI subcommand implementations.

pub mod compose;
pub mod report;
mod util;
pub mod window;
