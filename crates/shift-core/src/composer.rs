//! Building the work shift for an employee and date.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::intervals::TimeIntervals;
use crate::policy::ShiftPolicy;
use crate::resolver::resolve_strategy;
use crate::time_log::TimeLog;
use crate::types::EmployeeId;
use crate::window::TimeRange;

/// Where schedules and zones come from.
///
/// This allows composition to work with different schedule stores
/// (e.g., a weekly table from configuration, or test fixtures).
pub trait ScheduleSource {
    /// Returns the scheduled range for the employee on `date`, if any.
    fn time_range(&self, employee: &EmployeeId, date: NaiveDate) -> Option<TimeRange>;

    /// Returns the time zone the employee's schedule is expressed in.
    fn time_zone(&self, employee: &EmployeeId) -> Tz;
}

/// The logs and totals attributed to one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkShift {
    employee: EmployeeId,
    date: NaiveDate,
    time_logs: Vec<TimeLog>,
    total_work_time: Duration,
    total_pause_time: Duration,
}

impl WorkShift {
    fn empty(employee: EmployeeId, date: NaiveDate) -> Self {
        Self {
            employee,
            date,
            time_logs: Vec::new(),
            total_work_time: Duration::zero(),
            total_pause_time: Duration::zero(),
        }
    }

    #[must_use]
    pub const fn employee(&self) -> &EmployeeId {
        &self.employee
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The selected logs, in input order, including any that could not form
    /// a closed interval.
    #[must_use]
    pub fn time_logs(&self) -> &[TimeLog] {
        &self.time_logs
    }

    /// Time covered by the merged work intervals.
    #[must_use]
    pub const fn total_work_time(&self) -> Duration {
        self.total_work_time
    }

    /// Idle time between the merged work intervals.
    #[must_use]
    pub const fn total_pause_time(&self) -> Duration {
        self.total_pause_time
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time_logs.is_empty()
    }
}

/// Composes work shifts from time logs and a schedule source.
#[derive(Debug, Clone)]
pub struct WorkShiftComposer<S> {
    policy: ShiftPolicy,
    schedule: S,
}

impl<S: ScheduleSource> WorkShiftComposer<S> {
    pub const fn new(policy: ShiftPolicy, schedule: S) -> Self {
        Self { policy, schedule }
    }

    /// Builds the shift for `employee` on `date`.
    ///
    /// `logs` must be the employee's logs sorted ascending by entry time.
    /// Selected logs that are still open, or whose exit precedes their entry,
    /// stay in the shift's log list but add nothing to its totals.
    pub fn compose(
        &self,
        employee: &EmployeeId,
        date: NaiveDate,
        logs: &[TimeLog],
    ) -> Result<WorkShift> {
        let zone = self.schedule.time_zone(employee);
        let time_range = self.schedule.time_range(employee, date);
        let strategy = resolve_strategy(time_range, zone, &self.policy);

        let selected = strategy.infer(date, logs)?;
        if selected.is_empty() {
            debug!(%employee, %date, "no logs selected for shift");
            return Ok(WorkShift::empty(employee.clone(), date));
        }

        let intervals = TimeIntervals::of(selected.iter().filter_map(|log| log.interval()));
        let total_work_time = intervals.total_covered_duration();
        let total_pause_time = intervals.total_gap_duration();

        debug!(
            %employee,
            %date,
            logs = selected.len(),
            spans = intervals.len(),
            work_minutes = total_work_time.num_minutes(),
            pause_minutes = total_pause_time.num_minutes(),
            "composed shift"
        );

        Ok(WorkShift {
            employee: employee.clone(),
            date,
            time_logs: selected.into_iter().cloned().collect(),
            total_work_time,
            total_pause_time,
        })
    }

    /// Builds one shift per date, in the order given.
    ///
    /// Dates are composed independently and in parallel.
    pub fn compose_range(
        &self,
        employee: &EmployeeId,
        dates: &[NaiveDate],
        logs: &[TimeLog],
    ) -> Result<Vec<WorkShift>>
    where
        S: Sync,
    {
        dates
            .par_iter()
            .map(|date| self.compose(employee, *date, logs))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::OpenLogPolicy;
    use crate::types::WorksiteId;
    use chrono::{DateTime, NaiveTime, TimeZone, Utc};
    use chrono_tz::Europe::Madrid;

    /// Same range every day, or nothing scheduled at all.
    struct FixedSchedule(Option<TimeRange>);

    impl ScheduleSource for FixedSchedule {
        fn time_range(&self, _employee: &EmployeeId, _date: NaiveDate) -> Option<TimeRange> {
            self.0
        }

        fn time_zone(&self, _employee: &EmployeeId) -> Tz {
            Madrid
        }
    }

    fn employee() -> EmployeeId {
        EmployeeId::new("emp-1").unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn local(d: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Madrid
            .with_ymd_and_hms(2024, 3, d, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn range(start: (u32, u32), end: (u32, u32)) -> TimeRange {
        TimeRange::new(
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        )
    }

    fn log(d: u32, entry: (u32, u32), exit: Option<(u32, u32)>) -> TimeLog {
        TimeLog::new(
            employee(),
            WorksiteId::new("hq").unwrap(),
            local(d, entry.0, entry.1),
            exit.map(|(h, m)| local(d, h, m)),
        )
    }

    fn composer(time_range: Option<TimeRange>) -> WorkShiftComposer<FixedSchedule> {
        WorkShiftComposer::new(
            ShiftPolicy::with_margin(Duration::minutes(15)),
            FixedSchedule(time_range),
        )
    }

    /// Three days of split shifts around a lunch break.
    fn normal_week() -> Vec<TimeLog> {
        vec![
            log(11, (7, 50), Some((12, 0))),
            log(11, (13, 0), Some((17, 0))),
            log(12, (7, 45), Some((12, 0))),
            log(12, (12, 45), Some((14, 0))),
            log(12, (14, 30), Some((17, 45))),
            log(13, (7, 50), Some((12, 0))),
            log(13, (13, 0), Some((17, 0))),
        ]
    }

    #[test]
    fn test_normal_day_scenario() {
        // 07:45-17:15 widened by 15 minutes selects 07:30-17:30.
        let logs = normal_week();
        let shift = composer(Some(range((7, 45), (17, 15))))
            .compose(&employee(), date(12), &logs)
            .unwrap();

        assert_eq!(shift.employee(), &employee());
        assert_eq!(shift.date(), date(12));
        assert_eq!(shift.time_logs(), &logs[2..5]);
        assert_eq!(shift.total_work_time(), Duration::hours(8) + Duration::minutes(45));
        assert_eq!(shift.total_pause_time(), Duration::hours(1) + Duration::minutes(15));
    }

    #[test]
    fn test_schedule_starting_in_dst_gap_still_composes() {
        // Madrid skips 02:00-03:00 on 2024-03-31; 02:30 reads as 03:30, past
        // the 03:10 end, so the window is the instant 03:30 widened by 15 minutes.
        let logs = vec![log(31, (3, 20), Some((3, 40)))];
        let shift = composer(Some(range((2, 30), (3, 10))))
            .compose(&employee(), date(31), &logs)
            .unwrap();

        assert_eq!(shift.time_logs(), &logs[..]);
        assert_eq!(shift.total_work_time(), Duration::minutes(20));
    }

    #[test]
    fn test_no_logs_selected_gives_empty_shift() {
        let logs = normal_week();
        let shift = composer(Some(range((7, 45), (17, 15))))
            .compose(&employee(), date(20), &logs)
            .unwrap();
        assert!(shift.is_empty());
        assert_eq!(shift.total_work_time(), Duration::zero());
        assert_eq!(shift.total_pause_time(), Duration::zero());
    }

    #[test]
    fn test_empty_input() {
        let shift = composer(None).compose(&employee(), date(12), &[]).unwrap();
        assert!(shift.is_empty());
        assert_eq!(shift.date(), date(12));
    }

    #[test]
    fn test_unscheduled_day_uses_calendar_day() {
        let logs = normal_week();
        let shift = composer(None).compose(&employee(), date(11), &logs).unwrap();
        assert_eq!(shift.time_logs(), &logs[0..2]);
        assert_eq!(shift.total_work_time(), Duration::hours(8) + Duration::minutes(10));
        assert_eq!(shift.total_pause_time(), Duration::hours(1));
    }

    #[test]
    fn test_open_log_is_kept_but_not_counted() {
        let logs = vec![log(12, (8, 0), Some((12, 0))), log(12, (13, 0), None)];
        let shift = composer(Some(range((8, 0), (17, 0))))
            .compose(&employee(), date(12), &logs)
            .unwrap();
        assert_eq!(shift.time_logs().len(), 2);
        assert_eq!(shift.total_work_time(), Duration::hours(4));
        assert_eq!(shift.total_pause_time(), Duration::zero());
    }

    #[test]
    fn test_open_log_excluded_by_policy_is_not_kept() {
        let logs = vec![log(12, (8, 0), Some((12, 0))), log(12, (13, 0), None)];
        let composer = WorkShiftComposer::new(
            ShiftPolicy::new(Duration::minutes(15), OpenLogPolicy::Exclude),
            FixedSchedule(Some(range((8, 0), (17, 0)))),
        );
        let shift = composer.compose(&employee(), date(12), &logs).unwrap();
        assert_eq!(shift.time_logs(), &logs[..1]);
    }

    #[test]
    fn test_reversed_log_is_kept_but_not_counted() {
        let logs = vec![
            log(12, (8, 0), Some((12, 0))),
            log(12, (12, 30), Some((12, 10))),
            log(12, (13, 0), Some((17, 0))),
        ];
        let shift = composer(Some(range((8, 0), (17, 0))))
            .compose(&employee(), date(12), &logs)
            .unwrap();
        assert_eq!(shift.time_logs().len(), 3);
        assert_eq!(shift.total_work_time(), Duration::hours(8));
        assert_eq!(shift.total_pause_time(), Duration::hours(1));
    }

    #[test]
    fn test_overlapping_logs_are_not_double_counted() {
        let logs = vec![
            log(12, (8, 0), Some((12, 0))),
            log(12, (11, 0), Some((13, 0))),
            log(12, (13, 0), Some((16, 0))),
        ];
        let shift = composer(Some(range((8, 0), (17, 0))))
            .compose(&employee(), date(12), &logs)
            .unwrap();
        assert_eq!(shift.total_work_time(), Duration::hours(8));
        assert_eq!(shift.total_pause_time(), Duration::zero());
    }

    #[test]
    fn test_overnight_shift() {
        let logs = vec![
            TimeLog::new(
                employee(),
                WorksiteId::new("plant").unwrap(),
                local(12, 21, 55),
                Some(local(13, 2, 0)),
            ),
            TimeLog::new(
                employee(),
                WorksiteId::new("plant").unwrap(),
                local(13, 2, 30),
                Some(local(13, 6, 5)),
            ),
        ];
        let shift = composer(Some(range((22, 0), (6, 0))))
            .compose(&employee(), date(12), &logs)
            .unwrap();
        assert_eq!(shift.time_logs().len(), 2);
        assert_eq!(shift.total_work_time(), Duration::hours(7) + Duration::minutes(40));
        assert_eq!(shift.total_pause_time(), Duration::minutes(30));
    }

    #[test]
    fn test_compose_range_keeps_date_order() {
        let logs = normal_week();
        let dates = [date(13), date(11), date(12), date(14)];
        let shifts = composer(Some(range((7, 45), (17, 15))))
            .compose_range(&employee(), &dates, &logs)
            .unwrap();

        let got: Vec<_> = shifts.iter().map(WorkShift::date).collect();
        assert_eq!(got, dates);
        assert_eq!(shifts[0].time_logs(), &logs[5..7]);
        assert_eq!(shifts[1].time_logs(), &logs[0..2]);
        assert_eq!(shifts[2].total_work_time(), Duration::hours(8) + Duration::minutes(45));
        assert!(shifts[3].is_empty());
    }

    #[test]
    fn test_composer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WorkShiftComposer<FixedSchedule>>();
        assert_send_sync::<WorkShift>();
    }
}
