//! Busy records and the sources that produce them.

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::{HuddleError, Result};
use crate::window::TimeWindow;

/// One recorded busy period for one attendee.
///
/// Immutable once constructed. The attendee name is trimmed and guaranteed
/// non-empty; the period is guaranteed strictly positive in length (a
/// zero-length busy period would block nothing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusyRecord {
    attendee: String,
    label: String,
    start: NaiveTime,
    end: NaiveTime,
}

impl BusyRecord {
    /// Construct a record, validating the attendee name and the period.
    ///
    /// # Errors
    /// Returns [`HuddleError::InvalidRecord`] when the trimmed attendee name
    /// is empty or when `end <= start`.
    pub fn new(
        attendee: impl Into<String>,
        label: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self> {
        let raw = attendee.into();
        let name = raw.trim();
        if name.is_empty() {
            return Err(HuddleError::InvalidRecord(
                "attendee name is empty".to_string(),
            ));
        }
        if end <= start {
            return Err(HuddleError::InvalidRecord(format!(
                "busy period {}-{} for '{}' does not end after it starts",
                start.format("%H:%M"),
                end.format("%H:%M"),
                name
            )));
        }
        Ok(Self {
            attendee: name.to_string(),
            label: label.into(),
            start,
            end,
        })
    }

    pub fn attendee(&self) -> &str {
        &self.attendee
    }

    /// Free-text event label; may be empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// The record's busy period as a window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start,
            end: self.end,
        }
    }
}

/// A capability producing the full set of busy records available.
///
/// Implementations are free to read lazily or hand back a cached
/// collection; the engine consumes the returned snapshot once per call and
/// never retains or mutates it.
pub trait RecordSource {
    /// Produce every busy record this source knows about.
    fn records(&self) -> Result<Vec<BusyRecord>>;
}

/// A source backed by an in-memory record list.
///
/// Useful for tests and as a reference implementation.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<BusyRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<BusyRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn records(&self) -> Result<Vec<BusyRecord>> {
        Ok(self.records.clone())
    }
}
