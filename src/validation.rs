//! Session conflict validation.
//!
//! Checks a session collection against itself and the reference data.
//! Detects:
//! - Group and teacher overlaps between sessions on the same day
//! - Missing or inverted time ranges
//! - Days outside Monday–Friday
//! - Unknown group and teacher references
//!
//! # Ordering
//! Findings are emitted in a fixed order: every pairwise overlap check in
//! `(i, j)` order for `i < j`, then the per-session checks in collection
//! order. The same input always yields the same list.
//!
//! # Complexity
//! O(n²) pairwise. A weekly timetable holds a few hundred sessions.

use crate::models::{Dimension, Finding, ReferenceData, Session};

/// Dimensions on which two sessions collide.
///
/// Two sessions collide when they share a day, their time ranges overlap
/// (touching ranges do not), and they share a group and/or teacher. Group
/// is reported before teacher.
///
/// The two dimensions treat blanks differently: sessions without a group
/// never collide on group, while sessions without a teacher all count as
/// the same (unassigned) teacher.
pub fn overlap_dimensions(a: &Session, b: &Session) -> Vec<Dimension> {
    let mut dims = Vec::new();
    if a.day != b.day || !a.window().overlaps(&b.window()) {
        return dims;
    }
    if a.group().is_some() && a.group() == b.group() {
        dims.push(Dimension::Group);
    }
    if teacher_key(a) == teacher_key(b) {
        dims.push(Dimension::Teacher);
    }
    dims
}

fn teacher_key(s: &Session) -> &str {
    s.teacher_id.as_deref().unwrap_or("")
}

/// Validates a session collection.
///
/// Never fails: garbled rows are reported as findings.
pub fn validate(sessions: &[Session], refs: &ReferenceData) -> Vec<Finding> {
    let mut findings = Vec::new();

    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            for dimension in overlap_dimensions(a, b) {
                findings.push(Finding::Overlap {
                    dimension,
                    day: a.day,
                    session_a: a.id.clone(),
                    session_b: b.id.clone(),
                });
            }
        }
    }
    let overlap_count = findings.len();

    for s in sessions {
        if !s.has_valid_time() {
            findings.push(Finding::InvalidTime {
                session: s.id.clone(),
            });
        }
        if !s.has_valid_day() {
            findings.push(Finding::InvalidDay {
                session: s.id.clone(),
            });
        }
        if !refs.groups.contains(s.group()) {
            findings.push(Finding::UnknownGroup {
                session: s.id.clone(),
            });
        }
        if !refs.teachers.contains(s.teacher()) {
            findings.push(Finding::UnknownTeacher {
                session: s.id.clone(),
            });
        }
    }

    tracing::debug!(
        sessions = sessions.len(),
        overlaps = overlap_count,
        structural = findings.len() - overlap_count,
        "validated session collection"
    );

    findings
}
