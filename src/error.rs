//! Error types.
//!
//! Validation problems are reported as [`Finding`](crate::models::Finding)
//! values, not errors. Errors here only reject a single operation.

use thiserror::Error;

use crate::models::{Dimension, SessionId};

/// A move rejected because the new placement collides with another session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{moved} would overlap {blocking} on day {day} (same {dimension})")]
pub struct ConflictError {
    /// Session being moved.
    pub moved: SessionId,
    /// Session it would collide with.
    pub blocking: SessionId,
    /// Shared resource.
    pub dimension: Dimension,
    /// Day of the collision.
    pub day: i32,
}

/// Errors from [`SessionStore`](crate::store::SessionStore) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("overlap detected: {0}")]
    Conflict(#[from] ConflictError),
}

/// Errors from [`Dataset`](crate::dataset::Dataset) ingestion.
///
/// Only a document that is not a JSON object fails; individual
/// collections degrade to empty instead.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message() {
        let err = StoreError::from(ConflictError {
            moved: "S0000".into(),
            blocking: "S0003".into(),
            dimension: Dimension::Group,
            day: 2,
        });
        assert_eq!(
            err.to_string(),
            "overlap detected: S0000 would overlap S0003 on day 2 (same group)"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = StoreError::SessionNotFound("S9999".into());
        assert_eq!(err.to_string(), "session not found: S9999");
    }
}
