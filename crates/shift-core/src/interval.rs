//! Half-open time intervals over absolute instants.

use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::error::{Result, ShiftError};

/// An immutable span `[start, end)` between two instants.
///
/// `end >= start` always holds; a zero-length interval is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeInterval {
    /// Creates an interval, failing if `end` is before `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(ShiftError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a zero-length interval at `instant`.
    #[must_use]
    pub const fn point(instant: DateTime<Utc>) -> Self {
        Self {
            start: instant,
            end: instant,
        }
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the interval.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns true if the intervals share some non-empty span.
    ///
    /// Touching intervals do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if the intervals are disjoint but one ends exactly where
    /// the other starts.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        !self.overlaps(other) && (self.end == other.start || other.end == self.start)
    }

    /// Merge eligibility test.
    #[must_use]
    pub fn overlaps_or_touches(&self, other: &Self) -> bool {
        self.overlaps(other) || self.touches(other)
    }

    /// Returns the smallest interval covering both.
    ///
    /// Fails with [`ShiftError::DisjointIntervals`] if there is a gap between them.
    pub fn merge_with(&self, other: &Self) -> Result<Self> {
        if !self.overlaps_or_touches(other) {
            return Err(ShiftError::DisjointIntervals {
                first: self.to_string(),
                second: other.to_string(),
            });
        }
        Ok(Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// Returns the shared sub-interval, or `None` if the intervals do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Widens the interval by `margin` on both sides.
    ///
    /// The sign of `margin` is ignored. Bounds saturate at the representable
    /// instant range.
    #[must_use]
    pub fn expand_by(&self, margin: Duration) -> Self {
        let margin = margin.abs();
        let start = self
            .start
            .checked_sub_signed(margin)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let end = self
            .end
            .checked_add_signed(margin)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self { start, end }
    }

    #[must_use]
    pub fn ends_at_or_before(&self, instant: DateTime<Utc>) -> bool {
        self.end <= instant
    }

    #[must_use]
    pub fn starts_at_or_after(&self, instant: DateTime<Utc>) -> bool {
        self.start >= instant
    }

    /// Half-open membership: `start <= instant < end`.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
