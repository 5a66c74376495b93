//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use shift_core::{EmployeeId, OpenLogPolicy, ScheduleSource, ShiftPolicy, TimeRange};

use crate::schedule::WeeklySchedule;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// IANA zone the schedule is expressed in.
    pub time_zone: Tz,

    /// Slack around the shift window, in minutes.
    pub selection_margin_minutes: u32,

    /// Treatment of logs that have not been clocked out.
    pub open_logs: OpenLogPolicy,

    /// Scheduled ranges per weekday.
    pub schedule: WeeklySchedule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_zone: chrono_tz::UTC,
            selection_margin_minutes: 15,
            open_logs: OpenLogPolicy::default(),
            schedule: WeeklySchedule::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location, then an optional file,
    /// then `SHIFT_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SHIFT_*)
        figment = figment.merge(Env::prefixed("SHIFT_"));

        figment.extract()
    }

    /// The selection policy described by this configuration.
    #[must_use]
    pub fn policy(&self) -> ShiftPolicy {
        ShiftPolicy::new(
            Duration::minutes(i64::from(self.selection_margin_minutes)),
            self.open_logs,
        )
    }
}

impl ScheduleSource for Config {
    fn time_range(&self, _employee: &EmployeeId, date: NaiveDate) -> Option<TimeRange> {
        self.schedule.for_date(date)
    }

    fn time_zone(&self, _employee: &EmployeeId) -> Tz {
        self.time_zone
    }
}

/// Returns the platform-specific config directory for shift.
///
/// On Linux: `~/.config/shift`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("shift"))
}
