//! Shift inference: deciding which time logs belong to a date's shift.
//!
//! # Algorithm
//!
//! 1. Build the shift window for the date: the scheduled range anchored to the
//!    date, or the calendar day itself when nothing is scheduled
//! 2. Widen it by the policy's selection margin on both sides
//! 3. Walk the logs in entry order, stopping at the first log that enters at
//!    or after the end of the widened window
//! 4. Keep every log whose span overlaps the widened window
//!
//! Step 3 relies on the logs being sorted ascending by entry time. Histories
//! can be long, so the scan must not look past the window.

use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::error::Result;
use crate::interval::TimeInterval;
use crate::policy::{OpenLogPolicy, ShiftPolicy};
use crate::time_log::TimeLog;
use crate::window::{ShiftWindow, TimeRange};

/// Selects the logs that make up a shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftInferenceStrategy {
    /// The employee has a scheduled range for the date.
    Scheduled {
        policy: ShiftPolicy,
        time_range: TimeRange,
        zone: Tz,
    },
    /// Nothing is scheduled (weekends, days off); the calendar day is the window.
    Unscheduled { policy: ShiftPolicy, zone: Tz },
}

impl ShiftInferenceStrategy {
    #[must_use]
    pub const fn policy(&self) -> &ShiftPolicy {
        match self {
            Self::Scheduled { policy, .. } | Self::Unscheduled { policy, .. } => policy,
        }
    }

    #[must_use]
    pub const fn zone(&self) -> Tz {
        match self {
            Self::Scheduled { zone, .. } | Self::Unscheduled { zone, .. } => *zone,
        }
    }

    /// The shift window for `date`, before the margin is applied.
    pub fn window(&self, date: NaiveDate) -> Result<TimeInterval> {
        match self {
            Self::Scheduled {
                time_range, zone, ..
            } => ShiftWindow::scheduled(date, *time_range, *zone),
            Self::Unscheduled { zone, .. } => ShiftWindow::calendar_day(date, *zone),
        }
    }

    /// The shift window for `date` widened by the selection margin.
    pub fn selection_window(&self, date: NaiveDate) -> Result<TimeInterval> {
        Ok(self.window(date)?.expand_by(self.policy().selection_margin))
    }

    /// Returns the logs belonging to the shift on `date`, in input order.
    ///
    /// `logs` must be sorted ascending by entry time.
    ///
    /// A log with no exit time is handled per [`OpenLogPolicy`]. A log whose
    /// exit precedes its entry is judged as an instant at its entry time.
    pub fn infer<'a>(&self, date: NaiveDate, logs: &'a [TimeLog]) -> Result<Vec<&'a TimeLog>> {
        debug_assert!(
            logs.is_sorted_by_key(|log| log.entry_time),
            "time logs must be sorted by entry time"
        );

        let window = self.selection_window(date)?;
        let open_logs = self.policy().open_logs;

        let mut selected = Vec::new();
        for (index, log) in logs.iter().enumerate() {
            if window.ends_at_or_before(log.entry_time) {
                trace!(index, %window, "stopping scan past selection window");
                break;
            }
            if log_overlaps(log, &window, open_logs) {
                selected.push(log);
            }
        }

        debug!(
            %date,
            %window,
            scheduled = matches!(self, Self::Scheduled { .. }),
            considered = logs.len(),
            selected = selected.len(),
            "inferred shift logs"
        );
        Ok(selected)
    }
}

fn log_overlaps(log: &TimeLog, window: &TimeInterval, open_logs: OpenLogPolicy) -> bool {
    let Some(exit) = log.exit_time else {
        return match open_logs {
            OpenLogPolicy::Unbounded => log.entry_time < window.end(),
            OpenLogPolicy::Exclude => false,
        };
    };
    let span = TimeInterval::new(log.entry_time, exit)
        .unwrap_or_else(|_| TimeInterval::point(log.entry_time));
    span.overlaps(window)
}
