//! View filtering and list ordering.
//!
//! The list and grid views show a subset of sessions: one trimester, one
//! group, one teacher, or any combination. Filter option lists are built
//! from the values actually present in the collection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{normalize_trimester, Session};

/// Selection criteria for a view. Unset or empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFilter {
    /// Trimester, compared after digit normalization.
    pub trimester: Option<String>,
    /// Group id, exact match.
    pub group_id: Option<String>,
    /// Teacher id, exact match.
    pub teacher_id: Option<String>,
}

impl SessionFilter {
    /// Creates a filter that matches every session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a trimester.
    pub fn with_trimester(mut self, trimester: impl Into<String>) -> Self {
        self.trimester = Some(trimester.into());
        self
    }

    /// Restricts to a group.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Restricts to a teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Whether a session passes every set criterion.
    pub fn matches(&self, session: &Session) -> bool {
        if let Some(t) = set(&self.trimester) {
            if session.normalized_trimester() != normalize_trimester(t) {
                return false;
            }
        }
        if let Some(g) = set(&self.group_id) {
            if session.group_id.as_deref() != Some(g) {
                return false;
            }
        }
        if let Some(t) = set(&self.teacher_id) {
            if session.teacher_id.as_deref() != Some(t) {
                return false;
            }
        }
        true
    }

    /// Matching sessions, in input order.
    pub fn apply(&self, sessions: &[Session]) -> Vec<Session> {
        sessions.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

/// A session field offered as a filter choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Raw trimester label, as entered.
    Trimester,
    /// Group id.
    Group,
    /// Teacher id.
    Teacher,
}

/// Sorted, de-duplicated, non-empty values of `field` across `sessions`.
pub fn distinct_values(sessions: &[Session], field: FilterField) -> Vec<String> {
    sessions
        .iter()
        .filter_map(|s| match field {
            FilterField::Trimester => s.trimester.as_deref(),
            FilterField::Group => s.group_id.as_deref(),
            FilterField::Teacher => s.teacher_id.as_deref(),
        })
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Orders sessions for the list view: day, start, end, subject.
pub fn sort_sessions(sessions: &mut [Session]) {
    sessions.sort_by(list_order);
}

fn list_order(a: &Session, b: &Session) -> Ordering {
    a.day
        .cmp(&b.day)
        .then_with(|| a.start_str().cmp(b.start_str()))
        .then_with(|| a.end_str().cmp(b.end_str()))
        .then_with(|| a.subject_id.cmp(&b.subject_id))
}

fn set(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sessions() -> Vec<Session> {
        vec![
            Session::new(2, "09:25", "10:20")
                .with_group("1A")
                .with_teacher("T1")
                .with_trimester("T1")
                .with_subject("MAT"),
            Session::new(1, "08:30", "09:25")
                .with_group("1B")
                .with_teacher("T2")
                .with_trimester("2")
                .with_subject("CAT"),
            Session::new(1, "08:30", "09:25")
                .with_group("1A")
                .with_teacher("T2")
                .with_trimester("1r")
                .with_subject("ANG"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let sessions = sample_sessions();
        assert_eq!(SessionFilter::new().apply(&sessions).len(), 3);
        let blank = SessionFilter::new().with_group("").with_trimester(" ");
        assert_eq!(blank.apply(&sessions).len(), 3);
    }

    #[test]
    fn test_trimester_normalized() {
        let sessions = sample_sessions();
        let f = SessionFilter::new().with_trimester("Trimestre 1");
        let kept = f.apply(&sessions);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|s| s.group() == Some("1A")));
    }

    #[test]
    fn test_combined_criteria() {
        let sessions = sample_sessions();
        let f = SessionFilter::new().with_group("1A").with_teacher("T2");
        let kept = f.apply(&sessions);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].subject(), Some("ANG"));
    }

    #[test]
    fn test_distinct_values() {
        let mut sessions = sample_sessions();
        sessions.push(Session::new(3, "08:30", "09:25").with_group(""));
        assert_eq!(distinct_values(&sessions, FilterField::Group), vec!["1A", "1B"]);
        assert_eq!(distinct_values(&sessions, FilterField::Teacher), vec!["T1", "T2"]);
        assert_eq!(
            distinct_values(&sessions, FilterField::Trimester),
            vec!["1r", "2", "T1"]
        );
    }

    #[test]
    fn test_sort_sessions() {
        let mut sessions = sample_sessions();
        sort_sessions(&mut sessions);
        let subjects: Vec<_> = sessions.iter().filter_map(Session::subject).collect();
        assert_eq!(subjects, vec!["ANG", "CAT", "MAT"]);
    }
}
