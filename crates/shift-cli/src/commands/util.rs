//! Shared utilities for CLI commands.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use shift_core::{EmployeeId, TimeLog, WorkShift};

/// Formats a duration as "Xh Ym" if >= 1 hour, "Ym" if < 1 hour.
/// Negative durations are treated as 0m.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Formats an instant as wall-clock time in `zone`.
///
/// The date is only shown when it differs from `reference`.
pub fn format_instant(instant: DateTime<Utc>, zone: Tz, reference: NaiveDate) -> String {
    let local = instant.with_timezone(&zone);
    if local.date_naive() == reference {
        local.format("%H:%M").to_string()
    } else {
        local.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// JSON shape of a composed shift.
#[derive(Debug, Serialize)]
pub struct ShiftSummary<'a> {
    pub employee: &'a EmployeeId,
    pub date: NaiveDate,
    pub time_logs: &'a [TimeLog],
    pub total_work_ms: i64,
    pub total_pause_ms: i64,
}

impl<'a> From<&'a WorkShift> for ShiftSummary<'a> {
    fn from(shift: &'a WorkShift) -> Self {
        Self {
            employee: shift.employee(),
            date: shift.date(),
            time_logs: shift.time_logs(),
            total_work_ms: shift.total_work_time().num_milliseconds(),
            total_pause_ms: shift.total_pause_time().num_milliseconds(),
        }
    }
}
