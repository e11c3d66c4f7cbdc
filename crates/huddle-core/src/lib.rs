//! # huddle-core
//!
//! Find every time of day a meeting can start so that all of its attendees
//! are free for the whole thing.
//!
//! The engine collects the attendees' busy periods, merges overlaps into
//! disjoint busy windows, inverts them into free gaps within configurable
//! working hours, and shrinks each gap by the meeting duration into a
//! "can start here" window. A gap exactly as long as the meeting yields a
//! zero-length window: one valid start instant.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveTime;
//! use huddle_core::{AvailabilityEngine, BusyRecord, MemorySource, TimeWindow};
//!
//! let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
//!
//! let records = vec![
//!     BusyRecord::new("Alice", "Standup", t(9, 0), t(9, 30)).unwrap(),
//!     BusyRecord::new("Bob", "Review", t(9, 15), t(10, 0)).unwrap(),
//! ];
//! let hours = TimeWindow::new(t(8, 0), t(12, 0)).unwrap();
//! let engine = AvailabilityEngine::new(Box::new(MemorySource::new(records)), hours);
//!
//! let slots = engine.find_available_slots(&["alice", "BOB"], 60).unwrap();
//! // 08:00-09:00 fits a 60-minute meeting exactly once; after the merged
//! // busy block clears at 10:00 it can start any time up to 11:00.
//! assert_eq!(slots[0], TimeWindow::new(t(8, 0), t(8, 0)).unwrap());
//! assert_eq!(slots[1], TimeWindow::new(t(10, 0), t(11, 0)).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`window`] — the time-of-day interval value type
//! - [`record`] — busy records, the [`RecordSource`] trait, in-memory source
//! - [`csv`] — file-backed record source with skip-and-warn parsing
//! - [`cache`] — memoizing decorator guaranteeing at most one load
//! - [`engine`] — the merge/invert/fit availability pipeline
//! - [`config`] — startup-validated planner settings
//! - [`planner`] — outward facade returning plain time pairs
//! - [`error`] — error types

pub mod cache;
pub mod config;
pub mod csv;
pub mod engine;
pub mod error;
pub mod planner;
pub mod record;
pub mod window;

pub use cache::CachedSource;
pub use config::PlannerConfig;
pub use csv::{parse_records, CsvSource};
pub use engine::{free_windows, merge_windows, start_windows, AvailabilityEngine};
pub use error::{HuddleError, Result};
pub use planner::MeetingPlanner;
pub use record::{BusyRecord, MemorySource, RecordSource};
pub use window::TimeWindow;
