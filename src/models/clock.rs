//! Wall-clock time utilities.
//!
//! Sessions and breaks carry times of day as `"HH:MM"` text. Comparisons
//! are done on minute offsets from midnight.
//!
//! # Totality
//! Parsing never fails: a missing or malformed value reads as `00:00`,
//! so every pair of times stays comparable.

use serde::{Deserialize, Serialize};

/// Converts an `"HH:MM"` string to minutes since midnight.
///
/// A value with no minute part (`"9"`) reads as `9:00`. Anything else
/// that is not a clock time (non-numeric parts, hours outside 0..=23,
/// minutes outside 0..=59) reads as `00:00`.
pub fn to_minutes(hhmm: &str) -> i32 {
    parse_clock(hhmm).unwrap_or(0)
}

fn parse_clock(hhmm: &str) -> Option<i32> {
    let (hours, minutes) = match hhmm.trim().split_once(':') {
        Some((h, m)) => (h.trim(), Some(m.trim())),
        None => (hhmm.trim(), None),
    };
    let hours: i32 = hours.parse().ok().filter(|h| (0..=23).contains(h))?;
    let minutes: i32 = match minutes {
        Some(m) => m.parse().ok().filter(|m| (0..=59).contains(m))?,
        None => 0,
    };
    Some(hours * 60 + minutes)
}

/// Same as [`to_minutes`], for optional fields.
pub fn opt_minutes(hhmm: Option<&str>) -> i32 {
    hhmm.map(to_minutes).unwrap_or(0)
}

/// A time-of-day interval [start, end) in minutes.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MinuteWindow {
    /// Interval start (minutes, inclusive).
    pub start_min: i32,
    /// Interval end (minutes, exclusive).
    pub end_min: i32,
}

impl MinuteWindow {
    /// Creates a new window.
    pub fn new(start_min: i32, end_min: i32) -> Self {
        Self { start_min, end_min }
    }

    /// Parses a window from two `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Self {
        Self::new(to_minutes(start), to_minutes(end))
    }

    /// Whether two windows overlap.
    ///
    /// Windows that only touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min.max(other.start_min) < self.end_min.min(other.end_min)
    }
}

/// Whether two `"HH:MM"` ranges overlap.
pub fn overlaps(a_start: &str, a_end: &str, b_start: &str, b_end: &str) -> bool {
    MinuteWindow::parse(a_start, a_end).overlaps(&MinuteWindow::parse(b_start, b_end))
}
