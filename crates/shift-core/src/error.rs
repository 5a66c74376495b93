//! Error types for the shift engine.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::types::ValidationError;

/// Errors produced by interval algebra and shift window construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShiftError {
    /// An interval was constructed with its end before its start.
    #[error("interval end {end} is before start {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Two intervals that neither overlap nor touch were merged.
    ///
    /// `TimeIntervals::of` only merges eligible pairs, so seeing this
    /// outside a direct `merge_with` call is an internal bug.
    #[error("cannot merge disjoint intervals {first} and {second}")]
    DisjointIntervals { first: String, second: String },

    /// The calendar day after `date` cannot be represented.
    #[error("date {date} is at the edge of the supported calendar range")]
    DateOutOfRange { date: NaiveDate },

    /// An identifier failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience alias for results in this crate.
pub type Result<T, E = ShiftError> = std::result::Result<T, E>;
