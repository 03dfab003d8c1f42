//! Session store: the live, editable session collection.
//!
//! Holds the working copy of the sessions alongside the pristine snapshot
//! taken at load time. Edits are tracked per session: a session is dirty
//! while any of its fields differs from the snapshot, and clean again as
//! soon as every field matches.
//!
//! # Moves
//! [`SessionStore::move_session`] relocates a session to a new day and
//! time. The move is rejected, leaving the store untouched, if the new
//! placement overlaps another session of the same trimester that shares
//! its group or teacher. The rule is the one validation applies (see
//! [`overlap_dimensions`]), so two sessions with no teacher block each other.
//!
//! The host owns the store and serializes calls into it.

use std::collections::{BTreeSet, HashMap};

use crate::config::TimetableConfig;
use crate::error::{ConflictError, StoreError};
use crate::models::{Session, SessionId};
use crate::validation::overlap_dimensions;

/// A single-field edit of a session.
///
/// Text fields take `None` to clear the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEdit {
    /// Day of week, 1 = Monday.
    Day(i32),
    /// Start time, `"HH:MM"`.
    Start(Option<String>),
    /// End time, `"HH:MM"`.
    End(Option<String>),
    /// Trimester label.
    Trimester(Option<String>),
    /// Subject id.
    Subject(Option<String>),
    /// Group id.
    Group(Option<String>),
    /// Teacher or staff role id.
    Teacher(Option<String>),
    /// Free-text room.
    Room(Option<String>),
}

impl SessionEdit {
    fn apply(self, session: &mut Session) {
        match self {
            SessionEdit::Day(day) => session.day = day,
            SessionEdit::Start(v) => session.start = v,
            SessionEdit::End(v) => session.end = v,
            SessionEdit::Trimester(v) => session.trimester = v,
            SessionEdit::Subject(v) => session.subject_id = v,
            SessionEdit::Group(v) => session.group_id = v,
            SessionEdit::Teacher(v) => session.teacher_id = v,
            SessionEdit::Room(v) => session.room = v,
        }
    }
}

/// Editable session collection with change tracking.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    original: Vec<Session>,
    working: Vec<Session>,
    positions: HashMap<SessionId, usize>,
    dirty: BTreeSet<SessionId>,
}

impl SessionStore {
    /// Loads raw sessions, assigning each an id from its position.
    ///
    /// Any id already present on the records is replaced.
    pub fn load(raw: Vec<Session>, config: &TimetableConfig) -> Self {
        let original: Vec<Session> = raw
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                s.with_id(SessionId::from_index(&config.id_prefix, config.id_width, i))
            })
            .collect();
        let positions = original
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();

        tracing::debug!(sessions = original.len(), "loaded session store");

        Self {
            working: original.clone(),
            original,
            positions,
            dirty: BTreeSet::new(),
        }
    }

    /// The working sessions, in load order.
    pub fn sessions(&self) -> &[Session] {
        &self.working
    }

    /// The pristine snapshot taken at load time.
    pub fn original(&self) -> &[Session] {
        &self.original
    }

    /// Looks up a working session.
    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.positions.get(id).map(|&i| &self.working[i])
    }

    /// Number of sessions.
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Applies a single-field edit without conflict checking.
    pub fn update_session(
        &mut self,
        id: &SessionId,
        edit: SessionEdit,
    ) -> Result<&Session, StoreError> {
        let pos = self.position(id)?;
        edit.apply(&mut self.working[pos]);
        self.refresh_dirty(pos);
        Ok(&self.working[pos])
    }

    /// Moves a session to a new day and time.
    ///
    /// # Errors
    /// - [`StoreError::SessionNotFound`] if `id` is unknown.
    /// - [`StoreError::Conflict`] if the new placement overlaps another
    ///   session of the same trimester sharing its group or teacher. The
    ///   store is left unchanged.
    pub fn move_session(
        &mut self,
        id: &SessionId,
        day: i32,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<&Session, StoreError> {
        let pos = self.position(id)?;

        let mut candidate = self.working[pos].clone();
        candidate.day = day;
        candidate.start = Some(start.into());
        candidate.end = Some(end.into());

        if let Some(conflict) = self.find_conflict(&candidate) {
            tracing::warn!(
                session = %id,
                blocking = %conflict.blocking,
                dimension = %conflict.dimension,
                day,
                "rejected session move"
            );
            return Err(conflict.into());
        }

        let session = &mut self.working[pos];
        session.day = candidate.day;
        session.start = candidate.start;
        session.end = candidate.end;
        self.refresh_dirty(pos);
        Ok(&self.working[pos])
    }

    /// Whether a session differs from its snapshot.
    pub fn is_dirty(&self, id: &SessionId) -> bool {
        self.dirty.contains(id)
    }

    /// Sessions that differ from their snapshot, in load order.
    pub fn dirty_sessions(&self) -> Vec<&Session> {
        self.working
            .iter()
            .filter(|s| self.dirty.contains(&s.id))
            .collect()
    }

    /// Whether any session differs from its snapshot.
    pub fn has_changes(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Discards every edit, restoring the load-time snapshot.
    pub fn reset(&mut self) {
        tracing::debug!(discarded = self.dirty.len(), "reset session store");
        self.working = self.original.clone();
        self.dirty.clear();
    }

    /// The working sessions as interchange records (ids are not serialized).
    pub fn export(&self) -> Vec<Session> {
        self.working.clone()
    }

    /// The working sessions as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.working)
    }

    fn position(&self, id: &SessionId) -> Result<usize, StoreError> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::SessionNotFound(id.clone()))
    }

    fn find_conflict(&self, candidate: &Session) -> Option<ConflictError> {
        let trimester = candidate.normalized_trimester();
        self.working
            .iter()
            .filter(|other| other.id != candidate.id)
            .filter(|other| other.normalized_trimester() == trimester)
            .find_map(|other| {
                overlap_dimensions(candidate, other)
                    .first()
                    .map(|&dimension| ConflictError {
                        moved: candidate.id.clone(),
                        blocking: other.id.clone(),
                        dimension,
                        day: candidate.day,
                    })
            })
    }

    fn refresh_dirty(&mut self, pos: usize) {
        let id = self.working[pos].id.clone();
        if self.working[pos] == self.original[pos] {
            self.dirty.remove(&id);
        } else {
            self.dirty.insert(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> SessionStore {
        SessionStore::load(
            vec![
                Session::new(1, "08:30", "09:25")
                    .with_group("G1")
                    .with_teacher("T1")
                    .with_trimester("1"),
                Session::new(1, "09:25", "10:20")
                    .with_group("G1")
                    .with_teacher("T2")
                    .with_trimester("1"),
                Session::new(2, "08:30", "09:25")
                    .with_group("G2")
                    .with_teacher("T3")
                    .with_trimester("1"),
                Session::new(1, "09:25", "10:20")
                    .with_group("G1")
                    .with_teacher("T4")
                    .with_trimester("2"),
            ],
            &TimetableConfig::default(),
        )
    }

    fn id(s: &str) -> SessionId {
        SessionId::from(s)
    }

    #[test]
    fn test_load_assigns_ids() {
        let store = sample_store();
        let ids: Vec<&str> = store.sessions().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S0000", "S0001", "S0002", "S0003"]);
        assert_eq!(store.len(), 4);
        assert!(!store.has_changes());
    }

    #[test]
    fn test_move_conflict_leaves_store_unchanged() {
        let mut store = sample_store();
        let before = store.sessions().to_vec();

        let err = store
            .move_session(&id("S0000"), 1, "09:30", "10:15")
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Conflict(ConflictError {
                moved: id("S0000"),
                blocking: id("S0001"),
                dimension: crate::models::Dimension::Group,
                day: 1,
            })
        );
        assert_eq!(store.sessions(), before.as_slice());
        assert!(!store.has_changes());
    }

    #[test]
    fn test_move_teacher_conflict() {
        let mut store = sample_store();
        // S0002 shares no group with S0001; only the teacher collides.
        store
            .update_session(&id("S0002"), SessionEdit::Teacher(Some("T2".into())))
            .unwrap();
        let err = store
            .move_session(&id("S0002"), 1, "09:25", "10:20")
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Conflict(ConflictError {
                dimension: crate::models::Dimension::Teacher,
                ..
            })
        ));
    }

    #[test]
    fn test_move_blocked_by_unassigned_teacher() {
        let mut store = SessionStore::load(
            vec![
                Session::new(1, "08:30", "09:25").with_group("G1").with_trimester("1"),
                Session::new(2, "08:30", "09:25").with_group("G2").with_trimester("1"),
            ],
            &TimetableConfig::default(),
        );
        let err = store
            .move_session(&id("S0001"), 1, "09:00", "09:50")
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Conflict(ConflictError {
                moved: id("S0001"),
                blocking: id("S0000"),
                dimension: crate::models::Dimension::Teacher,
                day: 1,
            })
        );
        assert!(!store.has_changes());
    }

    #[test]
    fn test_move_ignores_other_trimester() {
        let mut store = sample_store();
        // S0003 is trimester 2; the group G1 slot at 08:30 is only taken in trimester 1.
        let moved = store
            .move_session(&id("S0003"), 1, "08:30", "09:25")
            .unwrap();
        assert_eq!(moved.start.as_deref(), Some("08:30"));
        assert!(store.is_dirty(&id("S0003")));
    }

    #[test]
    fn test_move_to_touching_slot_accepted() {
        let mut store = sample_store();
        store
            .move_session(&id("S0002"), 1, "10:20", "11:15")
            .unwrap();
        let s = store.get(&id("S0002")).unwrap();
        assert_eq!(s.day, 1);
        assert_eq!(s.end.as_deref(), Some("11:15"));
        assert_eq!(store.dirty_sessions().len(), 1);
    }

    #[test]
    fn test_move_back_clears_dirty() {
        let mut store = sample_store();
        store.move_session(&id("S0002"), 3, "08:30", "09:25").unwrap();
        assert!(store.is_dirty(&id("S0002")));
        store.move_session(&id("S0002"), 2, "08:30", "09:25").unwrap();
        assert!(!store.is_dirty(&id("S0002")));
        assert!(!store.has_changes());
    }

    #[test]
    fn test_move_unknown_session() {
        let mut store = sample_store();
        let err = store.move_session(&id("S9999"), 1, "08:30", "09:25").unwrap_err();
        assert_eq!(err, StoreError::SessionNotFound(id("S9999")));
    }

    #[test]
    fn test_update_any_field_marks_dirty() {
        let mut store = sample_store();
        store
            .update_session(&id("S0001"), SessionEdit::Room(Some("B2".into())))
            .unwrap();
        assert!(store.is_dirty(&id("S0001")));
        store
            .update_session(&id("S0001"), SessionEdit::Room(None))
            .unwrap();
        assert!(!store.is_dirty(&id("S0001")));
    }

    #[test]
    fn test_reset_restores_snapshot() {
        let mut store = sample_store();
        let pristine = store.export_json().unwrap();

        store.move_session(&id("S0002"), 4, "12:00", "13:00").unwrap();
        store
            .update_session(&id("S0000"), SessionEdit::Subject(Some("MAT".into())))
            .unwrap();
        assert!(store.has_changes());
        assert_ne!(store.export_json().unwrap(), pristine);

        store.reset();
        assert!(!store.has_changes());
        assert_eq!(store.sessions(), store.original());
        assert_eq!(store.export_json().unwrap(), pristine);
    }

    #[test]
    fn test_export_omits_ids() {
        let store = sample_store();
        let json: serde_json::Value = serde_json::from_str(&store.export_json().unwrap()).unwrap();
        let first = &json.as_array().unwrap()[0];
        assert!(first.get("id").is_none());
        assert_eq!(first["groupId"], "G1");
        assert_eq!(store.export().len(), 4);
    }

    #[test]
    fn test_empty_store() {
        let store = SessionStore::load(Vec::new(), &TimetableConfig::default());
        assert!(store.is_empty());
        assert!(store.dirty_sessions().is_empty());
    }
}
