//! The outward-facing planner — validated configuration in, time pairs out.

use chrono::NaiveTime;

use crate::cache::CachedSource;
use crate::config::PlannerConfig;
use crate::csv::CsvSource;
use crate::engine::AvailabilityEngine;
use crate::error::Result;
use crate::record::{BusyRecord, RecordSource};
use crate::window::TimeWindow;

/// Thin pass-through over the engine: wires the configured source chain
/// (CSV reader, optionally wrapped in the cache) and converts the engine's
/// windows into plain `(start, end)` pairs for callers that don't want the
/// window type.
pub struct MeetingPlanner {
    engine: AvailabilityEngine,
}

impl MeetingPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        let csv = CsvSource::new(config.calendar_path());
        let source: Box<dyn RecordSource + Send + Sync> = if config.cache_enabled() {
            Box::new(CachedSource::new(csv))
        } else {
            Box::new(csv)
        };
        Self {
            engine: AvailabilityEngine::new(source, config.working_hours()),
        }
    }

    /// Candidate start windows as `(start, end)` pairs, ascending.
    ///
    /// Semantics are [`AvailabilityEngine::find_available_slots`]'s; an
    /// empty vector means no common availability, which is a normal result.
    pub fn available_slots(
        &self,
        attendees: &[&str],
        duration_minutes: i64,
    ) -> Result<Vec<(NaiveTime, NaiveTime)>> {
        let windows = self
            .engine
            .find_available_slots(attendees, duration_minutes)?;
        Ok(windows.into_iter().map(|w| (w.start(), w.end())).collect())
    }

    /// The parsed record set the planner consults.
    pub fn records(&self) -> Result<Vec<BusyRecord>> {
        self.engine.records()
    }

    pub fn working_hours(&self) -> TimeWindow {
        self.engine.working_hours()
    }
}
