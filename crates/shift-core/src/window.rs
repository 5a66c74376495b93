//! Anchoring wall-clock schedules to absolute instants.
//!
//! A [`TimeRange`] is a recurring wall-clock window such as 08:00–17:30 or
//! 22:00–06:00. [`ShiftWindow`] pins one to a calendar date in a time zone,
//! rolling the end onto the next day when the range wraps midnight.
//!
//! # Local time resolution
//!
//! Wall times are resolved against the zone's rules:
//! - an ambiguous time (clocks fall back) resolves to the earlier instant
//! - a skipped time (clocks spring forward) keeps the offset in force before
//!   the transition, which lands it later by the length of the gap
//!
//! A range that starts inside a gap can resolve to a start after its end
//! (02:30–03:10 on a day where 02:00–03:00 is skipped). The end is then
//! clamped to the start, giving a zero-length window.
//!
//! Wall times whose instant falls outside the representable range fail with
//! [`ShiftError::DateOutOfRange`].

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShiftError};
use crate::interval::TimeInterval;

/// A recurring wall-clock window.
///
/// `end_time <= start_time` means the window crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(rename = "start")]
    pub start_time: NaiveTime,
    #[serde(rename = "end")]
    pub end_time: NaiveTime,
}

impl TimeRange {
    #[must_use]
    pub const fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// The whole calendar day, midnight to midnight.
    #[must_use]
    pub fn full_day() -> Self {
        let midnight = NaiveTime::default();
        Self::new(midnight, midnight)
    }

    /// Returns true if the window ends on the following calendar day.
    #[must_use]
    pub fn wraps_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }
}

/// Builds absolute windows from dates, ranges and zones.
#[derive(Debug, Clone, Copy)]
pub struct ShiftWindow;

impl ShiftWindow {
    /// Anchors `range` to `date` in `zone`.
    pub fn scheduled(date: NaiveDate, range: TimeRange, zone: Tz) -> Result<TimeInterval> {
        let start = resolve_local(zone, date.and_time(range.start_time))?;

        let end_date = if range.wraps_midnight() {
            date.succ_opt().ok_or(ShiftError::DateOutOfRange { date })?
        } else {
            date
        };
        let end = resolve_local(zone, end_date.and_time(range.end_time))?;

        TimeInterval::new(start, end.max(start))
    }

    /// The calendar day `date` in `zone`, midnight to midnight.
    pub fn calendar_day(date: NaiveDate, zone: Tz) -> Result<TimeInterval> {
        Self::scheduled(date, TimeRange::full_day(), zone)
    }
}

/// Converts a wall-clock time in `zone` to an instant.
fn resolve_local(zone: Tz, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => {
            let out_of_range = || ShiftError::DateOutOfRange { date: local.date() };
            // Transitions never come closer than a day apart, so the offset a
            // day earlier is the one in force just before the gap.
            let before = local
                .checked_sub_signed(Duration::days(1))
                .ok_or_else(out_of_range)?;
            let offset = zone.offset_from_utc_datetime(&before).fix();
            let utc = local
                .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
                .ok_or_else(out_of_range)?;
            Ok(Utc.from_utc_datetime(&utc))
        }
    }
}
