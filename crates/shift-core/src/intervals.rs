//! Normalized interval timelines.
//!
//! [`TimeIntervals`] turns an arbitrary bag of [`TimeInterval`]s into a
//! canonical, disjoint, ascending timeline and reports how much time it covers
//! and how much idle time lies between its spans.

use chrono::Duration;

use crate::interval::TimeInterval;

/// A normalized set of intervals: sorted by start, pairwise disjoint and
/// separated by a non-empty gap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeIntervals {
    intervals: Vec<TimeInterval>,
}

impl TimeIntervals {
    /// Normalizes `intervals` with a sort-and-sweep merge.
    ///
    /// Any order and any amount of duplication is accepted; an empty input
    /// produces an empty timeline.
    pub fn of<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = TimeInterval>,
    {
        let mut sorted: Vec<TimeInterval> = intervals.into_iter().collect();
        sorted.sort_unstable_by_key(TimeInterval::start);

        let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
        for interval in sorted {
            if let Some(last) = merged.last_mut() {
                // Sorted by start, so the accumulator only fails to merge
                // when there is a real gap.
                if let Ok(joined) = last.merge_with(&interval) {
                    *last = joined;
                    continue;
                }
            }
            merged.push(interval);
        }

        Self { intervals: merged }
    }

    /// Sum of the normalized spans.
    #[must_use]
    pub fn total_covered_duration(&self) -> Duration {
        self.intervals
            .iter()
            .fold(Duration::zero(), |total, interval| total + interval.duration())
    }

    /// Sum of the gaps between consecutive spans. Zero with fewer than two spans.
    #[must_use]
    pub fn total_gap_duration(&self) -> Duration {
        self.intervals
            .windows(2)
            .fold(Duration::zero(), |total, pair| {
                total + (pair[1].start() - pair[0].end())
            })
    }

    /// The interval from the first start to the last end.
    #[must_use]
    pub fn span(&self) -> Option<TimeInterval> {
        let first = self.intervals.first()?;
        let last = self.intervals.last()?;
        TimeInterval::new(first.start(), last.end()).ok()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TimeInterval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeInterval> {
        self.intervals.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl FromIterator<TimeInterval> for TimeIntervals {
    fn from_iter<T: IntoIterator<Item = TimeInterval>>(iter: T) -> Self {
        Self::of(iter)
    }
}

impl<'a> IntoIterator for &'a TimeIntervals {
    type Item = &'a TimeInterval;
    type IntoIter = std::slice::Iter<'a, TimeInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
