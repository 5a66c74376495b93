//! Shift selection policy.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// How logs that have not been clocked out take part in window selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenLogPolicy {
    /// An open log extends indefinitely: it is selected when its entry falls
    /// before the end of the expanded window.
    #[default]
    Unbounded,
    /// Open logs are never selected.
    Exclude,
}

/// Configuration for deciding which logs belong to a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPolicy {
    /// Slack applied on both sides of the shift window so that early
    /// clock-ins and late clock-outs still count.
    /// Default: 15 minutes.
    pub selection_margin: Duration,

    /// Treatment of logs without an exit time.
    /// Default: [`OpenLogPolicy::Unbounded`].
    pub open_logs: OpenLogPolicy,
}

impl ShiftPolicy {
    #[must_use]
    pub const fn new(selection_margin: Duration, open_logs: OpenLogPolicy) -> Self {
        Self {
            selection_margin,
            open_logs,
        }
    }

    /// Policy with the given margin and default open-log handling.
    #[must_use]
    pub fn with_margin(selection_margin: Duration) -> Self {
        Self {
            selection_margin,
            ..Self::default()
        }
    }
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            selection_margin: Duration::minutes(15),
            open_logs: OpenLogPolicy::default(),
        }
    }
}
