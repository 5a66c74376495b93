//! Window command: which window applies on a date, and how wide selection is.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use shift_core::{EmployeeId, ScheduleSource, ShiftInferenceStrategy, resolve_strategy};

use super::util::format_instant;
use crate::Config;

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    employee: &EmployeeId,
    date: NaiveDate,
) -> Result<()> {
    let zone = config.time_zone(employee);
    let strategy = resolve_strategy(config.time_range(employee, date), zone, &config.policy());
    let output = format_window(&strategy, date)
        .with_context(|| format!("failed to build the shift window for {date}"))?;
    write!(writer, "{output}")?;
    Ok(())
}

fn format_window(strategy: &ShiftInferenceStrategy, date: NaiveDate) -> shift_core::Result<String> {
    let zone = strategy.zone();
    let window = strategy.window(date)?;
    let selection = strategy.selection_window(date)?;

    let schedule = match strategy {
        ShiftInferenceStrategy::Scheduled { time_range, .. } => format!(
            "{}-{}",
            time_range.start_time.format("%H:%M"),
            time_range.end_time.format("%H:%M")
        ),
        ShiftInferenceStrategy::Unscheduled { .. } => "none (calendar day)".to_string(),
    };

    let mut output = String::new();
    let _ = writeln!(output, "Date:      {date} {} ({zone})", date.weekday());
    let _ = writeln!(output, "Schedule:  {schedule}");
    let _ = writeln!(
        output,
        "Window:    {} - {}",
        format_instant(window.start(), zone, date),
        format_instant(window.end(), zone, date)
    );
    let _ = writeln!(
        output,
        "Selection: {} - {}",
        format_instant(selection.start(), zone, date),
        format_instant(selection.end(), zone, date)
    );
    Ok(output)
}
