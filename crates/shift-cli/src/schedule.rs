//! Weekly schedule table read from configuration.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use shift_core::TimeRange;

/// Scheduled range per weekday. A missing day is a day off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thursday: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunday: Option<TimeRange>,
}

impl WeeklySchedule {
    /// The same range Monday to Friday, weekends off.
    #[must_use]
    pub const fn weekdays(range: TimeRange) -> Self {
        Self {
            monday: Some(range),
            tuesday: Some(range),
            wednesday: Some(range),
            thursday: Some(range),
            friday: Some(range),
            saturday: None,
            sunday: None,
        }
    }

    #[must_use]
    pub const fn for_weekday(&self, weekday: Weekday) -> Option<TimeRange> {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    #[must_use]
    pub fn for_date(&self, date: impl Datelike) -> Option<TimeRange> {
        self.for_weekday(date.weekday())
    }
}
