//! Sample entries every new dashboard starts with.

use chrono::{DateTime, Local, TimeZone, Utc};

use super::entry_book::EntryBook;
use crate::domain::{next_id, Entry, Status, Subtask};
use crate::progress::aggregate;

/// Wall-clock time in the local zone, stored as UTC
fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, hour, min, 0)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn seeded(name: &str, description: &str, status: Status, created_at: DateTime<Utc>, subtasks: &[(&str, bool, DateTime<Utc>)]) -> Entry {
    let mut entry = Entry::new(next_id(), name.to_string(), description.to_string(), status, created_at);
    entry.subtasks = subtasks
        .iter()
        .map(|(title, done, created)| {
            let mut task = Subtask::new(next_id(), title.to_string(), *created);
            task.completed = *done;
            task
        })
        .collect();
    entry.percentage = aggregate(&entry.subtasks);
    entry
}

/// Project Setup (done), API Integration (60%), UI Design (not started)
pub fn sample_book() -> EntryBook {
    let setup = seeded(
        "Project Setup",
        "Initialized repository and configured development environment",
        Status::Completed,
        at(2025, 11, 7, 10, 30),
        &[
            ("Initialize Git repository", true, at(2025, 11, 7, 10, 0)),
            ("Setup package.json", true, at(2025, 11, 7, 10, 15)),
            ("Configure development environment", true, at(2025, 11, 7, 10, 30)),
        ],
    );
    let api = seeded(
        "API Integration",
        "Working on integrating third-party APIs",
        Status::InProgress,
        at(2025, 11, 8, 9, 15),
        &[
            ("Research API endpoints", true, at(2025, 11, 8, 8, 0)),
            ("Set up API authentication", true, at(2025, 11, 8, 8, 30)),
            ("Implement data fetching", true, at(2025, 11, 8, 9, 0)),
            ("Add error handling", false, at(2025, 11, 8, 9, 15)),
            ("Write unit tests", false, at(2025, 11, 8, 9, 15)),
        ],
    );
    let design = seeded(
        "UI Design",
        "Scheduled to review mockups with design team",
        Status::Pending,
        at(2025, 11, 8, 14, 0),
        &[
            ("Create wireframes", false, at(2025, 11, 8, 14, 0)),
            ("Design mockups", false, at(2025, 11, 8, 14, 0)),
            ("Review with team", false, at(2025, 11, 8, 14, 0)),
        ],
    );
    EntryBook::with_entries(vec![setup, api, design])
}
