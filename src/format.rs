//! Display Formatting
//!
//! Helper functions for dates and counters shown in the views.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// `Nov 8, 2025, 9:15 AM` in the given zone
pub fn format_timestamp_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// `11/8/2025, 9:15:00 AM` in the given zone
pub fn format_note_time_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// History timestamp in the browser's zone
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    format_timestamp_in(ts, &Local)
}

/// Note timestamp in the browser's zone
pub fn format_note_time(ts: &DateTime<Utc>) -> String {
    format_note_time_in(ts, &Local)
}

/// "3 / 5 subtasks completed"
pub fn subtask_summary(done: usize, total: usize) -> String {
    format!("{} / {} subtasks completed", done, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proglog_core::Repository;

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 8, h, m, 0).unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp_in(&ts(9, 15), &Utc), "Nov 8, 2025, 9:15 AM");
        assert_eq!(format_timestamp_in(&ts(14, 0), &Utc), "Nov 8, 2025, 2:00 PM");
    }

    #[test]
    fn test_sample_entries_show_local_wall_clock() {
        let book = proglog_core::repository::sample_book();
        let api = &book.list()[1];
        assert_eq!(format_timestamp_in(&api.created_at, &Local), "Nov 8, 2025, 9:15 AM");
        assert_eq!(format_timestamp(&api.created_at), "Nov 8, 2025, 9:15 AM");
    }

    #[test]
    fn test_format_note_time() {
        assert_eq!(format_note_time_in(&ts(9, 15), &Utc), "11/8/2025, 9:15:00 AM");
    }

    #[test]
    fn test_subtask_summary() {
        assert_eq!(subtask_summary(3, 5), "3 / 5 subtasks completed");
    }
}
