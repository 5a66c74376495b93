//! Picks the inference strategy for a date.

use chrono_tz::Tz;
use tracing::debug;

use crate::policy::ShiftPolicy;
use crate::strategy::ShiftInferenceStrategy;
use crate::window::TimeRange;

/// Returns the scheduled strategy when a time range applies, and the
/// calendar-day strategy otherwise.
///
/// A missing range is the normal case for days off, not an error.
#[must_use]
pub fn resolve_strategy(
    time_range: Option<TimeRange>,
    zone: Tz,
    policy: &ShiftPolicy,
) -> ShiftInferenceStrategy {
    let strategy = match time_range {
        Some(time_range) => ShiftInferenceStrategy::Scheduled {
            policy: *policy,
            time_range,
            zone,
        },
        None => ShiftInferenceStrategy::Unscheduled {
            policy: *policy,
            zone,
        },
    };
    debug!(?strategy, "resolved shift strategy");
    strategy
}
