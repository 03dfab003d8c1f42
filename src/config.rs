//! Timetable configuration.
//!
//! Everything here has a sensible default, so an empty JSON object (or
//! [`TimetableConfig::default`]) describes a Monday–Friday week with
//! Catalan day labels.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Slot;

/// Host-tunable settings for ingestion and grid layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Day columns laid out by the grid, in display order.
    pub days: Vec<i32>,
    /// Display label per day.
    pub day_labels: BTreeMap<i32, String>,
    /// Label for breaks that carry none.
    pub default_break_label: String,
    /// Slots offered when a collection has no usable times.
    pub fallback_slots: Vec<Slot>,
    /// Prefix of ingestion ids.
    pub id_prefix: String,
    /// Zero-padded width of the numeric part of ingestion ids.
    pub id_width: usize,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        let day_labels = [
            (1, "Dilluns"),
            (2, "Dimarts"),
            (3, "Dimecres"),
            (4, "Dijous"),
            (5, "Divendres"),
        ]
        .into_iter()
        .map(|(d, l)| (d, l.to_string()))
        .collect();

        let fallback_slots = [
            ("08:30", "09:25"),
            ("09:25", "10:20"),
            ("10:20", "11:15"),
            ("11:45", "12:40"),
            ("12:40", "13:35"),
            ("13:35", "14:30"),
        ]
        .into_iter()
        .map(|(s, e)| Slot::new(s, e))
        .collect();

        Self {
            days: vec![1, 2, 3, 4, 5],
            day_labels,
            default_break_label: "DESCANS".to_string(),
            fallback_slots,
            id_prefix: "S".to_string(),
            id_width: 4,
        }
    }
}

impl TimetableConfig {
    /// Parses a JSON config document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Label for a day, or the day number as text.
    pub fn day_label(&self, day: i32) -> String {
        self.day_labels
            .get(&day)
            .cloned()
            .unwrap_or_else(|| day.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimetableConfig::default();
        assert_eq!(config.days, vec![1, 2, 3, 4, 5]);
        assert_eq!(config.day_label(1), "Dilluns");
        assert_eq!(config.day_label(5), "Divendres");
        assert_eq!(config.day_label(6), "6");
        assert_eq!(config.fallback_slots.len(), 6);
        assert_eq!(config.default_break_label, "DESCANS");
    }

    #[test]
    fn test_partial_json() {
        let config = TimetableConfig::from_json_str(
            r#"{"days":[1,2,3],"default_break_label":"PATI"}"#,
        )
        .unwrap();
        assert_eq!(config.days, vec![1, 2, 3]);
        assert_eq!(config.default_break_label, "PATI");
        assert_eq!(config.id_prefix, "S");
        assert_eq!(config.day_label(2), "Dimarts");
    }

    #[test]
    fn test_empty_json() {
        let config = TimetableConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TimetableConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        assert!(TimetableConfig::from_json_str("[1,2]").is_err());
    }
}
