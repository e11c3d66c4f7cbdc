//! Error types for availability computation and record loading.

use chrono::NaiveTime;
use thiserror::Error;

use crate::window::TimeWindow;

#[derive(Error, Debug)]
pub enum HuddleError {
    /// A time window was constructed with its end before its start.
    #[error("invalid window: end {end} precedes start {start}")]
    InvalidWindow { start: NaiveTime, end: NaiveTime },

    /// Two windows that neither overlap nor touch were asked to merge.
    /// The merge pass only ever merges adjacent sorted windows, so seeing
    /// this outside direct `merge_with` calls means an invariant broke.
    #[error("cannot merge disjoint windows {a} and {b}")]
    CannotMerge { a: TimeWindow, b: TimeWindow },

    /// The requested meeting duration was zero or negative.
    #[error("meeting duration must be positive, got {0} minutes")]
    InvalidDuration(i64),

    /// Working hours or the calendar source failed validation at startup.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A busy record failed validation. The CSV reader recovers from this
    /// per line (skip and warn); it never aborts a whole read.
    #[error("invalid busy record: {0}")]
    InvalidRecord(String),

    /// The calendar source could not be read.
    #[error("failed to read calendar data: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout huddle-core.
pub type Result<T> = std::result::Result<T, HuddleError>;
