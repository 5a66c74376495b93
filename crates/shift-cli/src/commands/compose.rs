//! Compose command: the shift for one employee on one date.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use shift_core::{EmployeeId, WorkShift, WorkShiftComposer};

use super::util::{ShiftSummary, format_duration, format_instant};
use crate::Config;
use crate::logs::load_logs;

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    employee: &EmployeeId,
    date: NaiveDate,
    logs_path: &Path,
    json: bool,
) -> Result<()> {
    let logs = load_logs(logs_path, employee)?;
    let composer = WorkShiftComposer::new(config.policy(), config.clone());
    let shift = composer
        .compose(employee, date, &logs)
        .with_context(|| format!("failed to compose shift for {employee} on {date}"))?;

    if json {
        serde_json::to_writer_pretty(&mut *writer, &ShiftSummary::from(&shift))?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", format_shift(&shift, config.time_zone))?;
    }
    Ok(())
}

/// Renders a shift as human-readable text.
pub fn format_shift(shift: &WorkShift, zone: Tz) -> String {
    let mut output = String::new();
    let date = shift.date();

    let _ = writeln!(output, "Shift for {} on {date} ({zone})", shift.employee());
    if shift.is_empty() {
        let _ = writeln!(output, "No logs in shift.");
    }
    for log in shift.time_logs() {
        let entry = format_instant(log.entry_time, zone, date);
        let line = match (log.exit_time, log.interval()) {
            (None, _) => format!("{entry} - open"),
            (Some(exit), Some(interval)) => format!(
                "{entry} - {}  {}",
                format_instant(exit, zone, date),
                format_duration(interval.duration())
            ),
            (Some(exit), None) => format!(
                "{entry} - {}  skipped",
                format_instant(exit, zone, date)
            ),
        };
        let _ = writeln!(output, "  {line}");
    }
    let _ = writeln!(output, "Work:  {}", format_duration(shift.total_work_time()));
    let _ = writeln!(output, "Pause: {}", format_duration(shift.total_pause_time()));
    output
}
