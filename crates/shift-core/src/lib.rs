//! Shift inference and interval engine.
//!
//! Given one employee's clock-in/clock-out records, this crate decides which
//! records belong to a date's work shift and computes how long was worked and
//! how long was paused:
//! - Intervals: half-open spans and their normalization into a disjoint timeline
//! - Windows: anchoring wall-clock schedules (including overnight ones) to a date
//! - Inference: selecting the logs that overlap the shift window
//! - Composition: assembling the [`WorkShift`] aggregate
//!
//! Everything here is pure and synchronous; fetching logs and schedules is
//! the caller's business.

mod composer;
mod error;
mod interval;
mod intervals;
mod policy;
mod resolver;
mod strategy;
mod time_log;
pub mod types;
mod window;

pub use composer::{ScheduleSource, WorkShift, WorkShiftComposer};
pub use error::{Result, ShiftError};
pub use interval::TimeInterval;
pub use intervals::TimeIntervals;
pub use policy::{OpenLogPolicy, ShiftPolicy};
pub use resolver::resolve_strategy;
pub use strategy::ShiftInferenceStrategy;
pub use time_log::TimeLog;
pub use types::{EmployeeId, TimeLogId, ValidationError, WorksiteId};
pub use window::{ShiftWindow, TimeRange};
