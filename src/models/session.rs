//! Session model.
//!
//! A session is one weekly occurrence of a subject taught by a teacher to
//! a group, on a given day, time range and room.
//!
//! # Ingestion
//! Records arrive loosely shaped. Deserialization is lenient so that a
//! garbled field becomes a validation finding rather than a load failure:
//! - `day` accepts a number or a numeric string; anything else reads as `0`.
//! - `trimester` and the reference ids accept strings or numbers.
//! - `subjectId` also accepts the legacy key `subject`.
//!
//! The [`SessionId`] is assigned after parsing and is never serialized.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::clock::{opt_minutes, MinuteWindow};

/// Stable in-memory key of a session (e.g. `S0007`).
///
/// Assigned once at ingestion from the record's position and never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates an id from raw text.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the id for the record at `index`: prefix + zero-padded index.
    pub fn from_index(prefix: &str, width: usize, index: usize) -> Self {
        Self(format!("{prefix}{index:0width$}"))
    }

    /// The id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A scheduled weekly session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Ingestion key. Not part of the interchange format.
    #[serde(skip)]
    pub id: SessionId,
    /// Day of week, 1 (Monday) to 5 (Friday). Other values are kept as-is.
    #[serde(default, deserialize_with = "lenient_day")]
    pub day: i32,
    /// Start time, `"HH:MM"`.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End time, `"HH:MM"`.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Term tag (free-form, e.g. `"1"`, `"T2"`).
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub trimester: Option<String>,
    /// Subject reference.
    #[serde(
        default,
        alias = "subject",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject_id: Option<String>,
    /// Group (class) reference.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Teacher reference.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    /// Room, free text.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl Session {
    /// Creates a session on `day` from `start` to `end`.
    pub fn new(day: i32, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day,
            start: Some(start.into()),
            end: Some(end.into()),
            ..Default::default()
        }
    }

    /// Sets the id.
    pub fn with_id(mut self, id: impl Into<SessionId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the group.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Sets the teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = Some(subject_id.into());
        self
    }

    /// Sets the trimester.
    pub fn with_trimester(mut self, trimester: impl Into<String>) -> Self {
        self.trimester = Some(trimester.into());
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Start time, or empty text if absent.
    pub fn start_str(&self) -> &str {
        self.start.as_deref().unwrap_or("")
    }

    /// End time, or empty text if absent.
    pub fn end_str(&self) -> &str {
        self.end.as_deref().unwrap_or("")
    }

    /// Group id if present and non-empty.
    pub fn group(&self) -> Option<&str> {
        non_empty(&self.group_id)
    }

    /// Teacher id if present and non-empty.
    pub fn teacher(&self) -> Option<&str> {
        non_empty(&self.teacher_id)
    }

    /// Subject id if present and non-empty.
    pub fn subject(&self) -> Option<&str> {
        non_empty(&self.subject_id)
    }

    /// Time range in minutes. Missing times read as `00:00`.
    pub fn window(&self) -> MinuteWindow {
        MinuteWindow::new(
            opt_minutes(self.start.as_deref()),
            opt_minutes(self.end.as_deref()),
        )
    }

    /// Whether both times are present and `start < end`.
    ///
    /// Compared as text: the `"HH:MM"` format is fixed-width.
    pub fn has_valid_time(&self) -> bool {
        match (non_empty(&self.start), non_empty(&self.end)) {
            (Some(start), Some(end)) => start < end,
            _ => false,
        }
    }

    /// Whether the day is a weekday (1..=5).
    pub fn has_valid_day(&self) -> bool {
        (1..=5).contains(&self.day)
    }

    /// Trimester reduced to its digits. See [`normalize_trimester`].
    pub fn normalized_trimester(&self) -> String {
        normalize_trimester(self.trimester.as_deref().unwrap_or(""))
    }
}

/// Reduces a trimester tag to its first run of digits.
///
/// `"T2"`, `"2n"` and `"2"` all become `"2"`. Text without digits is
/// returned trimmed but otherwise unchanged.
pub fn normalize_trimester(raw: &str) -> String {
    let raw = raw.trim();
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        raw.to_string()
    } else {
        digits
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn lenient_day<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let day = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|d| i32::try_from(d).ok())
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    Ok(day)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
