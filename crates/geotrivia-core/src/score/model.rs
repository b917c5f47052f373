//! Persisted score record.

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

/// Result of one completed session, as persisted to disk.
///
/// The field names `user`, `points` and `time` are part of the on-disk
/// format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Sequential player label for the session (`user0`, `user1`, ...).
    pub user: String,
    /// Correct answers given during the session.
    pub points: u32,
    /// Preformatted end-of-session timestamp,
    /// e.g. "Monday, January 5th 2024 14:32".
    pub time: String,
}

impl Score {
    /// Creates the record for a session that finished at `recorded_at`.
    pub fn new(user: impl Into<String>, points: u32, recorded_at: DateTime<Local>) -> Self {
        Self {
            user: user.into(),
            points,
            time: format_timestamp(recorded_at),
        }
    }
}

/// Formats a timestamp as `"<full weekday>, <full month> <ordinal day>
/// <year> <HH:MM>"`, e.g. "Monday, January 5th 2024 14:32".
pub fn format_timestamp(at: DateTime<Local>) -> String {
    format!(
        "{} {}{} {}",
        at.format("%A, %B"),
        at.day(),
        ordinal_suffix(at.day()),
        at.format("%Y %H:%M"),
    )
}

/// English ordinal suffix for a day of the month (1st, 2nd, 3rd, 4th, ...).
fn ordinal_suffix(day: u32) -> &'static str {
    // 11..13 take "th" despite ending in 1, 2, 3
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
