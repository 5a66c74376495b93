use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use shift_core::EmployeeId;
use tracing_subscriber::EnvFilter;

use shift_cli::commands::{compose, report, window};
use shift_cli::{Cli, Commands, Config};

fn parse_employee(id: &str) -> Result<EmployeeId> {
    EmployeeId::new(id).context("invalid --employee")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Compose {
            employee,
            date,
            logs,
            json,
        } => {
            let employee = parse_employee(employee)?;
            compose::run(&mut out, &config, &employee, *date, logs, *json)?;
        }
        Commands::Report {
            employee,
            from,
            to,
            logs,
            json,
        } => {
            let employee = parse_employee(employee)?;
            report::run(&mut out, &config, &employee, *from, *to, logs, *json)?;
        }
        Commands::Window { date, employee } => {
            let employee = parse_employee(employee)?;
            window::run(&mut out, &config, &employee, *date)?;
        }
    }

    out.flush()?;
    Ok(())
}
