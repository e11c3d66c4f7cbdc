//! Planner configuration, validated once at startup.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;

use crate::error::{HuddleError, Result};
use crate::window::TimeWindow;

/// Validated settings for a meeting planner.
///
/// Construction is the single validation point: bad working hours or a
/// missing calendar file fail here, never per query.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    working_hours: TimeWindow,
    calendar_path: PathBuf,
    cache_enabled: bool,
}

impl PlannerConfig {
    /// # Errors
    /// Returns [`HuddleError::InvalidConfiguration`] when `day_end` is not
    /// strictly after `day_start`, or when the calendar path is not an
    /// existing file.
    pub fn new(
        day_start: NaiveTime,
        day_end: NaiveTime,
        calendar_path: impl Into<PathBuf>,
        cache_enabled: bool,
    ) -> Result<Self> {
        if day_end <= day_start {
            return Err(HuddleError::InvalidConfiguration(format!(
                "working hours end {} must be after start {}",
                day_end.format("%H:%M"),
                day_start.format("%H:%M")
            )));
        }
        let calendar_path = calendar_path.into();
        if !calendar_path.is_file() {
            return Err(HuddleError::InvalidConfiguration(format!(
                "calendar file not found: {}",
                calendar_path.display()
            )));
        }
        Ok(Self {
            working_hours: TimeWindow::new(day_start, day_end)?,
            calendar_path,
            cache_enabled,
        })
    }

    pub fn working_hours(&self) -> TimeWindow {
        self.working_hours
    }

    pub fn calendar_path(&self) -> &Path {
        &self.calendar_path
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }
}
