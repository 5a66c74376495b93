//! Report command: shifts for every date in a range.
//!
//! This module implements `shift report --from --to` with human-readable
//! and JSON output.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Duration, NaiveDate};
use chrono_tz::Tz;
use shift_core::{EmployeeId, WorkShift, WorkShiftComposer};

use super::util::{ShiftSummary, format_duration};
use crate::Config;
use crate::logs::load_logs;

/// Longest range a single report may cover.
const MAX_REPORT_DAYS: usize = 366;

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    employee: &EmployeeId,
    from: NaiveDate,
    to: NaiveDate,
    logs_path: &Path,
    json: bool,
) -> Result<()> {
    let dates = report_dates(from, to)?;
    let logs = load_logs(logs_path, employee)?;

    let composer = WorkShiftComposer::new(config.policy(), config.clone());
    let shifts = composer
        .compose_range(employee, &dates, &logs)
        .with_context(|| format!("failed to compose shifts for {employee}"))?;

    if json {
        let summaries: Vec<ShiftSummary<'_>> = shifts.iter().map(ShiftSummary::from).collect();
        serde_json::to_writer_pretty(&mut *writer, &summaries)?;
        writeln!(writer)?;
    } else {
        write!(
            writer,
            "{}",
            format_report(employee, from, to, config.time_zone, &shifts)
        )?;
    }
    Ok(())
}

/// Every date from `from` to `to`, inclusive.
fn report_dates(from: NaiveDate, to: NaiveDate) -> Result<Vec<NaiveDate>> {
    if to < from {
        bail!("report range ends ({to}) before it starts ({from})");
    }
    let dates: Vec<NaiveDate> = from
        .iter_days()
        .take_while(|date| *date <= to)
        .take(MAX_REPORT_DAYS + 1)
        .collect();
    if dates.len() > MAX_REPORT_DAYS {
        bail!("report range is longer than {MAX_REPORT_DAYS} days");
    }
    Ok(dates)
}

/// Renders one line per date and a total.
pub fn format_report(
    employee: &EmployeeId,
    from: NaiveDate,
    to: NaiveDate,
    zone: Tz,
    shifts: &[WorkShift],
) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Shifts for {employee}, {from} to {to} ({zone})");

    let mut total_work = Duration::zero();
    let mut total_pause = Duration::zero();
    let mut days_worked = 0;

    for shift in shifts {
        let date = shift.date();
        let weekday = date.weekday();
        if shift.is_empty() {
            let _ = writeln!(output, "{date} {weekday}  -");
            continue;
        }
        days_worked += 1;
        total_work += shift.total_work_time();
        total_pause += shift.total_pause_time();
        let _ = writeln!(
            output,
            "{date} {weekday}  work {}  pause {}  logs {}",
            format_duration(shift.total_work_time()),
            format_duration(shift.total_pause_time()),
            shift.time_logs().len()
        );
    }

    let _ = writeln!(
        output,
        "Total  work {}  pause {}  days {days_worked}",
        format_duration(total_work),
        format_duration(total_pause)
    );
    output
}
