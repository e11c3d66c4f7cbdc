//! End-to-end tests for configuration validation and the planner facade.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveTime;
use huddle_core::{HuddleError, MeetingPlanner, PlannerConfig};
use tempfile::TempDir;

fn t(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

/// Write Alice and Jack's reference day to a calendar file in `dir`.
fn sample_calendar(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("calendar.csv");
    fs::write(
        &path,
        "Alice,Standup,08:00,09:30\n\
         Alice,\"Lunch, team planning\",13:00,14:00\n\
         Alice,Review,16:00,17:00\n\
         Jack,Standup,08:00,08:50\n\
         Jack,1:1,09:00,09:40\n\
         Jack,\"Lunch, team planning\",13:00,14:00\n\
         Jack,Review,16:00,17:00\n",
    )
    .unwrap();
    path
}

#[test]
fn config_rejects_inverted_working_hours() {
    let dir = tempfile::tempdir().unwrap();
    let path = sample_calendar(&dir);

    for (start, end) in [(t(19, 0), t(7, 0)), (t(9, 0), t(9, 0))] {
        let err = PlannerConfig::new(start, end, &path, true).unwrap_err();
        assert!(
            matches!(err, HuddleError::InvalidConfiguration(_)),
            "expected InvalidConfiguration, got {:?}",
            err
        );
    }
}

#[test]
fn config_rejects_a_missing_calendar_file() {
    let err =
        PlannerConfig::new(t(7, 0), t(19, 0), "/nonexistent/calendar.csv", true).unwrap_err();
    assert!(matches!(err, HuddleError::InvalidConfiguration(_)));
}

#[test]
fn config_reports_what_it_was_given() {
    let dir = tempfile::tempdir().unwrap();
    let path = sample_calendar(&dir);

    let config = PlannerConfig::new(t(7, 0), t(19, 0), &path, false).unwrap();

    assert_eq!(config.working_hours().start(), t(7, 0));
    assert_eq!(config.working_hours().end(), t(19, 0));
    assert_eq!(config.calendar_path(), path);
    assert!(!config.cache_enabled());
}

#[test]
fn planner_finds_slots_from_a_calendar_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = sample_calendar(&dir);
    let config = PlannerConfig::new(t(7, 0), t(19, 0), &path, true).unwrap();
    let planner = MeetingPlanner::new(config);

    let slots = planner.available_slots(&["Alice", "Jack"], 60).unwrap();

    assert_eq!(
        slots,
        vec![
            (t(7, 0), t(7, 0)),
            (t(9, 40), t(12, 0)),
            (t(14, 0), t(15, 0)),
            (t(17, 0), t(18, 0)),
        ]
    );
}

#[test]
fn planner_exposes_the_parsed_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = sample_calendar(&dir);
    let config = PlannerConfig::new(t(7, 0), t(19, 0), &path, true).unwrap();
    let planner = MeetingPlanner::new(config);

    let records = planner.records().unwrap();

    assert_eq!(records.len(), 7);
    assert_eq!(records[1].label(), "Lunch, team planning");
    assert_eq!(planner.working_hours().end(), t(19, 0));
}

#[test]
fn uncached_planner_observes_calendar_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calendar.csv");
    fs::write(&path, "Alice,Standup,08:00,09:30\n").unwrap();

    let config = PlannerConfig::new(t(7, 0), t(19, 0), &path, false).unwrap();
    let planner = MeetingPlanner::new(config);

    assert_eq!(planner.records().unwrap().len(), 1);
    fs::write(
        &path,
        "Alice,Standup,08:00,09:30\nJack,Review,10:00,11:00\n",
    )
    .unwrap();
    assert_eq!(planner.records().unwrap().len(), 2);
}

#[test]
fn cached_planner_keeps_serving_its_first_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calendar.csv");
    fs::write(&path, "Alice,Standup,08:00,09:30\n").unwrap();

    let config = PlannerConfig::new(t(7, 0), t(19, 0), &path, true).unwrap();
    let planner = MeetingPlanner::new(config);

    assert_eq!(planner.records().unwrap().len(), 1);
    fs::write(
        &path,
        "Alice,Standup,08:00,09:30\nJack,Review,10:00,11:00\n",
    )
    .unwrap();
    assert_eq!(
        planner.records().unwrap().len(),
        1,
        "cached planner must not reread the file"
    );
}
