//! Time-of-day windows — the interval value type everything else builds on.
//!
//! A [`TimeWindow`] is a closed interval within a single day. Zero-length
//! windows (start == end) are valid and denote a single instant; the
//! availability pipeline uses them to say "the meeting can start at exactly
//! this time and no later".
//!
//! The overlap/merge distinction matters: two windows that only touch at an
//! endpoint do **not** overlap, but they **can** merge. Busy periods
//! 09:00-10:00 and 10:00-11:00 leave no free time between them, yet neither
//! claims the other's instants.

use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::{HuddleError, Result};

/// A closed time-of-day interval with `end >= start`.
///
/// Immutable value type with structural equality. Windows order by start
/// time ascending (end time as tiebreak), which is the sort key the merge
/// pass relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimeWindow {
    pub(crate) start: NaiveTime,
    pub(crate) end: NaiveTime,
}

impl TimeWindow {
    /// Construct a window, rejecting `end < start`.
    ///
    /// Zero-length windows are permitted: `new(t, t)` is the single instant
    /// `t`, not an error.
    ///
    /// # Errors
    /// Returns [`HuddleError::InvalidWindow`] when `end` precedes `start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if end < start {
            return Err(HuddleError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length of the window in whole minutes. Zero for instant windows.
    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }

    /// True iff the two windows share non-zero-length time.
    ///
    /// Touching endpoints do not count: `09:00-10:00` and `10:00-11:00` do
    /// not overlap. Merging treats them differently — see
    /// [`can_merge_with`](Self::can_merge_with).
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// True iff the two windows overlap *or* touch at an endpoint, i.e.
    /// their union is a single contiguous window.
    pub fn can_merge_with(&self, other: &TimeWindow) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// The window spanning the earliest start to the latest end of the two.
    ///
    /// # Errors
    /// Returns [`HuddleError::CannotMerge`] when the windows neither overlap
    /// nor touch — merging them would invent time neither window covers.
    pub fn merge_with(&self, other: &TimeWindow) -> Result<TimeWindow> {
        if !self.can_merge_with(other) {
            return Err(HuddleError::CannotMerge {
                a: *self,
                b: *other,
            });
        }
        Ok(TimeWindow {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
