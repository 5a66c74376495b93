//! Clock-in/clock-out records as supplied by the time-log source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::TimeInterval;
use crate::types::{EmployeeId, TimeLogId, WorksiteId};

/// One clock-in, optionally followed by a clock-out.
///
/// Records are read-only input to the engine. Nothing here guarantees that
/// `exit_time` comes after `entry_time`; upstream data may be malformed and
/// the engine tolerates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TimeLogId>,
    pub employee: EmployeeId,
    pub worksite: WorksiteId,
    pub entry_time: DateTime<Utc>,
    /// `None` while the employee is still clocked in.
    #[serde(default)]
    pub exit_time: Option<DateTime<Utc>>,
}

impl TimeLog {
    #[must_use]
    pub const fn new(
        employee: EmployeeId,
        worksite: WorksiteId,
        entry_time: DateTime<Utc>,
        exit_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: None,
            employee,
            worksite,
            entry_time,
            exit_time,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: TimeLogId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true while the employee has not clocked out.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }

    /// The worked span, if the record is closed and well-formed.
    #[must_use]
    pub fn interval(&self) -> Option<TimeInterval> {
        let exit = self.exit_time?;
        TimeInterval::new(self.entry_time, exit).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 12, hour, 0, 0).unwrap()
    }

    fn log(entry: u32, exit: Option<u32>) -> TimeLog {
        TimeLog::new(
            EmployeeId::new("emp-1").unwrap(),
            WorksiteId::new("hq").unwrap(),
            at(entry),
            exit.map(at),
        )
    }

    #[test]
    fn test_closed_log_has_interval() {
        let interval = log(8, Some(12)).interval().unwrap();
        assert_eq!(interval.start(), at(8));
        assert_eq!(interval.end(), at(12));
    }

    #[test]
    fn test_open_log_has_no_interval() {
        let open = log(8, None);
        assert!(open.is_open());
        assert_eq!(open.interval(), None);
    }

    #[test]
    fn test_reversed_log_has_no_interval() {
        assert_eq!(log(12, Some(8)).interval(), None);
    }

    #[test]
    fn test_deserialize_without_exit_or_id() {
        let json = r#"{
            "employee": "emp-1",
            "worksite": "hq",
            "entry_time": "2024-03-12T08:00:00Z"
        }"#;
        let parsed: TimeLog = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, log(8, None));
    }

    #[test]
    fn test_deserialize_rejects_empty_employee() {
        let json = r#"{
            "employee": "",
            "worksite": "hq",
            "entry_time": "2024-03-12T08:00:00Z"
        }"#;
        assert!(serde_json::from_str::<TimeLog>(json).is_err());
    }

    #[test]
    fn test_serialize_skips_missing_id() {
        let json = serde_json::to_value(log(8, Some(9)).with_id(TimeLogId::new("t1").unwrap()))
            .unwrap();
        assert_eq!(json["id"], "t1");
        let json = serde_json::to_value(log(8, Some(9))).unwrap();
        assert!(json.get("id").is_none());
    }
}
