//! CSV calendar source — one busy record per line.
//!
//! Wire format: four ordered comma-separated fields,
//! `attendee,label,start,end`, with times in fixed zero-padded `HH:MM`.
//! The free-text label may be wrapped in double quotes to embed the comma
//! delimiter:
//!
//! ```text
//! Alice,Standup,08:00,09:30
//! Alice,"Lunch, team",13:00,14:00
//! ```
//!
//! The format is fixed and minimal, so splitting is an explicit two-state
//! scanner (a quote toggles the in-quotes flag, a comma only splits outside
//! quotes) rather than a CSV library. A malformed line never aborts the
//! read: it is skipped with a warning carrying its line number, and parsing
//! continues with the remaining lines.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use tracing::warn;

use crate::error::{HuddleError, Result};
use crate::record::{BusyRecord, RecordSource};

/// Reads busy records from a delimited calendar file on every call.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvSource {
    fn records(&self) -> Result<Vec<BusyRecord>> {
        let text = fs::read_to_string(&self.path)?;
        Ok(parse_records(&text))
    }
}

/// Parse a whole calendar document into records.
///
/// Blank lines are ignored; malformed lines are dropped individually with a
/// diagnostic. This can only shrink the result, never fail it.
pub fn parse_records(text: &str) -> Vec<BusyRecord> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(err) => warn!(line = idx + 1, error = %err, "skipping malformed calendar line"),
        }
    }
    records
}

/// Parse one `attendee,label,start,end` line into a record.
fn parse_line(line: &str) -> Result<BusyRecord> {
    let fields = split_fields(line)?;
    if fields.len() != 4 {
        return Err(HuddleError::InvalidRecord(format!(
            "expected 4 fields, got {}",
            fields.len()
        )));
    }
    let start = parse_time(&fields[2])?;
    let end = parse_time(&fields[3])?;
    BusyRecord::new(fields[0].as_str(), fields[1].as_str(), start, end)
}

/// Parse a `HH:MM` time-of-day field.
fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| HuddleError::InvalidRecord(format!("invalid time '{}': expected HH:MM", s)))
}

/// Split one line on commas, honoring double quotes.
///
/// A `"` toggles the in-quotes flag and is dropped from the field; a `,`
/// ends the current field only while outside quotes. Fields are trimmed
/// after splitting.
fn split_fields(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    if in_quotes {
        return Err(HuddleError::InvalidRecord(
            "unterminated quote".to_string(),
        ));
    }
    fields.push(current.trim().to_string());
    Ok(fields)
}
