//! The availability pipeline — from busy records to bookable start windows.
//!
//! Given the attendees' busy records, a working-hours bound, and a meeting
//! duration, the pipeline runs four passes, each consuming the previous
//! one's output:
//!
//! 1. collect the requested attendees' busy periods, clipped to working
//!    hours (periods entirely outside them are dropped);
//! 2. merge overlapping or touching periods into disjoint busy windows
//!    ([`merge_windows`]);
//! 3. invert the busy windows into the free gaps between them
//!    ([`free_windows`]);
//! 4. shrink each gap to the range of instants the meeting could *start*
//!    at and still fit ([`start_windows`]).
//!
//! All four passes are pure; validation happens once at the entry point.
//! A gap exactly as long as the meeting yields a zero-length start window —
//! one valid start instant, not "no availability".

use std::collections::HashSet;

use chrono::Duration;

use crate::error::{HuddleError, Result};
use crate::record::{BusyRecord, RecordSource};
use crate::window::TimeWindow;

/// Computes candidate meeting start windows from a record source.
///
/// The engine reads the source once per query and treats the returned
/// collection as an immutable snapshot for that call.
pub struct AvailabilityEngine {
    source: Box<dyn RecordSource + Send + Sync>,
    working_hours: TimeWindow,
}

impl AvailabilityEngine {
    /// `working_hours` must already be validated (end strictly after start);
    /// the configuration layer owns that check.
    pub fn new(source: Box<dyn RecordSource + Send + Sync>, working_hours: TimeWindow) -> Self {
        Self {
            source,
            working_hours,
        }
    }

    pub fn working_hours(&self) -> TimeWindow {
        self.working_hours
    }

    /// The record collection the engine computes over (one source read).
    pub fn records(&self) -> Result<Vec<BusyRecord>> {
        self.source.records()
    }

    /// All windows during which a meeting of `duration_minutes` could start
    /// such that every named attendee is free for its entire length.
    ///
    /// Attendee matching is case-insensitive; an attendee with no records is
    /// free all day. An empty attendee set yields an empty result (no
    /// attendees means no meeting to schedule), and a duration longer than
    /// the working day yields an empty result without reading the source.
    /// Zero candidate windows is a normal outcome, not an error.
    ///
    /// # Errors
    /// Returns [`HuddleError::InvalidDuration`] for a zero or negative
    /// duration, before anything else runs. Source read failures propagate.
    pub fn find_available_slots(
        &self,
        attendees: &[&str],
        duration_minutes: i64,
    ) -> Result<Vec<TimeWindow>> {
        if duration_minutes <= 0 {
            return Err(HuddleError::InvalidDuration(duration_minutes));
        }
        if attendees.is_empty() {
            return Ok(Vec::new());
        }
        let span = self
            .working_hours
            .end
            .signed_duration_since(self.working_hours.start);
        // Compared in whole minutes: durations near i64::MAX are valid
        // input but out of range for a TimeDelta.
        if duration_minutes > span.num_minutes() {
            return Ok(Vec::new());
        }

        let records = self.source.records()?;
        let busy = collect_busy(&records, attendees, self.working_hours);
        let merged = merge_windows(busy);
        let free = free_windows(&merged, self.working_hours);
        Ok(start_windows(&free, duration_minutes))
    }
}

/// Collect the requested attendees' busy periods as windows clipped to
/// working hours, discarding periods entirely outside them.
fn collect_busy(
    records: &[BusyRecord],
    attendees: &[&str],
    hours: TimeWindow,
) -> Vec<TimeWindow> {
    let requested: HashSet<String> = attendees.iter().map(|name| name.to_lowercase()).collect();

    records
        .iter()
        .filter(|r| requested.contains(&r.attendee().to_lowercase()))
        .filter(|r| r.start() < hours.end && r.end() > hours.start)
        .map(|r| TimeWindow {
            start: r.start().max(hours.start),
            end: r.end().min(hours.end),
        })
        .collect()
}

/// Merge overlapping or touching windows into a sorted, pairwise-disjoint
/// sequence.
///
/// Sorts by start time (end as tiebreak), then extends the last emitted
/// window whenever the next one overlaps or touches it. The output windows
/// neither overlap nor touch each other.
pub fn merge_windows(mut windows: Vec<TimeWindow>) -> Vec<TimeWindow> {
    if windows.is_empty() {
        return windows;
    }
    windows.sort();

    let mut merged: Vec<TimeWindow> = Vec::with_capacity(windows.len());
    for window in windows {
        if let Some(last) = merged.last_mut() {
            if last.can_merge_with(&window) {
                // Sorted input: `last` starts no later than `window`, so the
                // span keeps `last`'s start and takes the later end.
                *last = TimeWindow {
                    start: last.start,
                    end: last.end.max(window.end),
                };
                continue;
            }
        }
        merged.push(window);
    }
    merged
}

/// Invert merged busy windows into the free gaps between them, bounded by
/// working hours.
///
/// `busy` must be ascending, disjoint, and clipped to `working_hours` — the
/// shape [`merge_windows`] produces. Walks a cursor from the working-hours
/// start: each busy window the cursor hasn't reached emits the gap before
/// it, and the stretch after the last busy window emits a trailing gap.
/// The result covers exactly the complement of `busy` within working hours.
pub fn free_windows(busy: &[TimeWindow], working_hours: TimeWindow) -> Vec<TimeWindow> {
    let mut free = Vec::new();
    let mut cursor = working_hours.start;

    for window in busy {
        if cursor < window.start {
            free.push(TimeWindow {
                start: cursor,
                end: window.start,
            });
        }
        cursor = cursor.max(window.end);
    }

    // Trailing gap after the last busy window.
    if cursor < working_hours.end {
        free.push(TimeWindow {
            start: cursor,
            end: working_hours.end,
        });
    }

    free
}

/// Shrink each free window to the instants a meeting of `duration_minutes`
/// could start at and still finish inside it.
///
/// A gap of exactly the duration yields a zero-length window — its start is
/// the single valid instant. Gaps too short for the duration are dropped
/// silently, as is every gap when the duration exceeds what a day can hold.
pub fn start_windows(free: &[TimeWindow], duration_minutes: i64) -> Vec<TimeWindow> {
    // Out of range for a TimeDelta means out of range for any gap in a day.
    let duration = match Duration::try_minutes(duration_minutes) {
        Some(d) => d,
        None => return Vec::new(),
    };

    free.iter()
        .filter_map(|window| {
            let slack = window.end.signed_duration_since(window.start);
            if slack < duration {
                return None;
            }
            // latest_start = end - duration, computed without wrapping
            // past midnight.
            let latest_start = window.start + (slack - duration);
            Some(TimeWindow {
                start: window.start,
                end: latest_start,
            })
        })
        .collect()
}
