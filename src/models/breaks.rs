//! Break (non-teaching interval) model.
//!
//! Breaks are day-agnostic: a lunch break applies to every day column
//! where it is shown.

use serde::{Deserialize, Serialize};

use super::clock::{to_minutes, MinuteWindow};

/// A non-teaching interval such as a recess or lunch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// Start time, `"HH:MM"`.
    #[serde(default)]
    pub start: String,
    /// End time, `"HH:MM"`.
    #[serde(default)]
    pub end: String,
    /// Label shown across the grid.
    #[serde(default)]
    pub label: String,
}

impl Break {
    /// Creates a break.
    pub fn new(start: impl Into<String>, end: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            label: label.into(),
        }
    }

    /// Time range in minutes.
    pub fn window(&self) -> MinuteWindow {
        MinuteWindow::parse(&self.start, &self.end)
    }

    /// Start in minutes.
    #[inline]
    pub fn start_min(&self) -> i32 {
        to_minutes(&self.start)
    }
}

/// Cleans a raw break list.
///
/// Drops breaks without a start or end, fills empty labels with
/// `default_label`, and sorts by start time (stable).
pub fn normalize_breaks(raw: &[Break], default_label: &str) -> Vec<Break> {
    let mut breaks: Vec<Break> = raw
        .iter()
        .filter(|b| !b.start.trim().is_empty() && !b.end.trim().is_empty())
        .map(|b| {
            let mut b = b.clone();
            if b.label.trim().is_empty() {
                b.label = default_label.to_string();
            }
            b
        })
        .collect();
    breaks.sort_by_key(|b| b.start_min());
    breaks
}
