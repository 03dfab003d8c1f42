//! Validation findings.
//!
//! A finding is one advisory result of a validation pass: an overlap
//! between two sessions, or a structural problem with one session.
//! Findings are data, never errors; a dataset with findings can still
//! be saved.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::session::SessionId;

/// The resource two overlapping sessions compete for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Same group (class) in two places at once.
    Group,
    /// Same teacher in two places at once.
    Teacher,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Group => f.write_str("group"),
            Dimension::Teacher => f.write_str("teacher"),
        }
    }
}

/// One validation or conflict result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Finding {
    /// Two sessions on the same day overlap and share a group or teacher.
    #[serde(rename_all = "camelCase")]
    Overlap {
        /// Shared resource.
        dimension: Dimension,
        /// Day both sessions fall on.
        day: i32,
        /// Earlier session in collection order.
        session_a: SessionId,
        /// Later session in collection order.
        session_b: SessionId,
    },
    /// Missing start/end, or start not before end.
    InvalidTime { session: SessionId },
    /// Day outside 1..=5.
    InvalidDay { session: SessionId },
    /// Group id not in the group index.
    UnknownGroup { session: SessionId },
    /// Teacher id not in the teacher index.
    UnknownTeacher { session: SessionId },
}

/// Discriminant of a [`Finding`], for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    /// [`Finding::Overlap`] on [`Dimension::Group`].
    GroupOverlap,
    /// [`Finding::Overlap`] on [`Dimension::Teacher`].
    TeacherOverlap,
    /// [`Finding::InvalidTime`].
    InvalidTime,
    /// [`Finding::InvalidDay`].
    InvalidDay,
    /// [`Finding::UnknownGroup`].
    UnknownGroup,
    /// [`Finding::UnknownTeacher`].
    UnknownTeacher,
}

impl Finding {
    /// The finding's kind.
    pub fn kind(&self) -> FindingKind {
        match self {
            Finding::Overlap {
                dimension: Dimension::Group,
                ..
            } => FindingKind::GroupOverlap,
            Finding::Overlap {
                dimension: Dimension::Teacher,
                ..
            } => FindingKind::TeacherOverlap,
            Finding::InvalidTime { .. } => FindingKind::InvalidTime,
            Finding::InvalidDay { .. } => FindingKind::InvalidDay,
            Finding::UnknownGroup { .. } => FindingKind::UnknownGroup,
            Finding::UnknownTeacher { .. } => FindingKind::UnknownTeacher,
        }
    }

    /// Sessions referenced by this finding.
    pub fn sessions(&self) -> Vec<&SessionId> {
        match self {
            Finding::Overlap {
                session_a,
                session_b,
                ..
            } => vec![session_a, session_b],
            Finding::InvalidTime { session }
            | Finding::InvalidDay { session }
            | Finding::UnknownGroup { session }
            | Finding::UnknownTeacher { session } => vec![session],
        }
    }

    /// Whether this finding references `id`.
    pub fn involves(&self, id: &SessionId) -> bool {
        self.sessions().contains(&id)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Overlap {
                dimension,
                day,
                session_a,
                session_b,
            } => write!(
                f,
                "{dimension} overlap on day {day} between {session_a} and {session_b}"
            ),
            Finding::InvalidTime { session } => write!(f, "invalid time range in {session}"),
            Finding::InvalidDay { session } => write!(f, "invalid day in {session}"),
            Finding::UnknownGroup { session } => write!(f, "unknown group in {session}"),
            Finding::UnknownTeacher { session } => write!(f, "unknown teacher in {session}"),
        }
    }
}

/// Findings that reference one session, in original order.
pub fn findings_for<'a>(findings: &'a [Finding], id: &SessionId) -> Vec<&'a Finding> {
    findings.iter().filter(|f| f.involves(id)).collect()
}
