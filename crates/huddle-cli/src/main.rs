//! `huddle` CLI — find common meeting availability from a calendar file.
//!
//! ## Usage
//!
//! ```sh
//! # When can Alice and Jack meet for an hour?
//! huddle --calendar team.csv find --attendees Alice,Jack --duration 60
//!
//! # Same result as JSON, for scripting
//! huddle --calendar team.csv find --attendees Alice,Jack --duration 60 --json
//!
//! # Working hours other than the 07:00-19:00 default
//! huddle --calendar team.csv --day-start 09:00 --day-end 17:30 \
//!     find --attendees Alice --duration 30
//!
//! # List the busy records parsed from the calendar
//! huddle --calendar team.csv records
//! ```
//!
//! The calendar path can also come from the `HUDDLE_CALENDAR` environment
//! variable.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use huddle_core::{BusyRecord, MeetingPlanner, PlannerConfig};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "huddle",
    version,
    about = "Find common meeting availability across calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Calendar file with one busy record per line
    #[arg(long, env = "HUDDLE_CALENDAR")]
    calendar: PathBuf,

    /// Start of the working day (HH:MM)
    #[arg(long, default_value = "07:00", value_parser = parse_time)]
    day_start: NaiveTime,

    /// End of the working day (HH:MM)
    #[arg(long, default_value = "19:00", value_parser = parse_time)]
    day_end: NaiveTime,

    /// Reread the calendar on every query instead of caching the first read
    #[arg(long)]
    no_cache: bool,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the windows in which a meeting can start
    Find {
        /// Comma-separated attendee names (matched case-insensitively)
        #[arg(short, long)]
        attendees: String,
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: i64,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the busy records parsed from the calendar
    Records {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for the --json output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto {
    earliest_start: String,
    latest_start: String,
}

impl From<&(NaiveTime, NaiveTime)> for SlotDto {
    fn from((start, end): &(NaiveTime, NaiveTime)) -> Self {
        Self {
            earliest_start: format_time(*start),
            latest_start: format_time(*end),
        }
    }
}

#[derive(Serialize)]
struct RecordDto {
    attendee: String,
    label: String,
    start: String,
    end: String,
}

impl From<&BusyRecord> for RecordDto {
    fn from(r: &BusyRecord) -> Self {
        Self {
            attendee: r.attendee().to_string(),
            label: r.label().to_string(),
            start: format_time(r.start()),
            end: format_time(r.end()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; diagnostics go to stderr so --json stdout stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = PlannerConfig::new(cli.day_start, cli.day_end, &cli.calendar, !cli.no_cache)
        .context("invalid planner configuration")?;
    let planner = MeetingPlanner::new(config);

    match cli.command {
        Commands::Find {
            attendees,
            duration,
            json,
        } => {
            let names = split_attendees(&attendees);
            if names.is_empty() {
                bail!("no attendee names given; try --attendees Alice,Jack");
            }
            let name_refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();

            let slots = planner
                .available_slots(&name_refs, duration)
                .context("failed to compute availability")?;
            debug!(slots = slots.len(), "availability query complete");

            if json {
                let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
                println!("{}", serde_json::to_string_pretty(&dtos)?);
            } else if slots.is_empty() {
                println!(
                    "No common availability for a {}-minute meeting.",
                    duration
                );
            } else {
                println!("A {}-minute meeting can start:", duration);
                for (start, end) in &slots {
                    if start == end {
                        println!("  at {} exactly", format_time(*start));
                    } else {
                        println!(
                            "  between {} and {}",
                            format_time(*start),
                            format_time(*end)
                        );
                    }
                }
            }
        }
        Commands::Records { json } => {
            let records = planner.records().context("failed to read the calendar")?;
            debug!(records = records.len(), "calendar loaded");

            if json {
                let dtos: Vec<RecordDto> = records.iter().map(RecordDto::from).collect();
                println!("{}", serde_json::to_string_pretty(&dtos)?);
            } else if records.is_empty() {
                println!("No busy records in {}.", cli.calendar.display());
            } else {
                for r in &records {
                    println!(
                        "{}  {}-{}  {}",
                        r.attendee(),
                        format_time(r.start()),
                        format_time(r.end()),
                        r.label()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Split the --attendees argument on commas.
///
/// - `--attendees Alice,Jack` produces `["Alice", "Jack"]`
/// - Whitespace around names is trimmed
/// - Empty entries (doubled or trailing commas) are dropped
fn split_attendees(raw: &str) -> Vec<String> {
    let mut names = Vec::new();
    for part in raw.split(',') {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            names.push(trimmed.to_string());
        }
    }
    names
}

/// Parse a `HH:MM` command-line time argument.
fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| format!("invalid time '{}': expected HH:MM", s))
}

fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
