//! Dataset ingestion.
//!
//! A dataset is one JSON object holding every collection the engine
//! consumes. Keys are accepted in English or under the legacy Catalan
//! file names:
//!
//! | Collection | Keys |
//! |------------|------|
//! | sessions | `sessions` |
//! | groups | `groups`, `classes` |
//! | teachers | `teachers`, `professors` |
//! | staff roles | `roles`, `rols` |
//! | subjects | `subjects`, `assignatures` |
//! | breaks | `breaks`, `descansos` |
//!
//! # Degradation
//! A missing or malformed collection loads as empty. A malformed session
//! row is kept as an empty [`Session`], so it keeps its position (and
//! therefore its id) and surfaces as validation findings. Malformed
//! records in the other collections are skipped. All of these are logged
//! at `warn`. Only a document that is not a JSON object is an error.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::TimetableConfig;
use crate::error::DatasetError;
use crate::models::{Break, Reference, ReferenceData, Session, Subject};
use crate::store::SessionStore;

/// Every collection consumed by validation, layout and the store.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Session records, one per input row, in input order.
    pub sessions: Vec<Session>,
    /// Group (class) references.
    pub groups: Vec<Reference>,
    /// Teacher references.
    pub teachers: Vec<Reference>,
    /// Staff roles; valid wherever a teacher id is expected.
    pub roles: Vec<Reference>,
    /// Subject references.
    pub subjects: Vec<Subject>,
    /// Raw break definitions, before normalization.
    pub breaks: Vec<Break>,
}

impl Dataset {
    /// Parses a dataset document.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Builds a dataset from an already-parsed document.
    pub fn from_value(value: Value) -> Result<Self, DatasetError> {
        let Value::Object(root) = value else {
            return Err(DatasetError::NotAnObject(kind_of(&value)));
        };

        Ok(Self {
            sessions: collection(&root, &["sessions"], || Some(Session::default())),
            groups: collection(&root, &["groups", "classes"], skip),
            teachers: collection(&root, &["teachers", "professors"], skip),
            roles: collection(&root, &["roles", "rols"], skip),
            subjects: collection(&root, &["subjects", "assignatures"], skip),
            breaks: collection(&root, &["breaks", "descansos"], skip),
        })
    }

    /// Reference indexes over the groups, teachers, roles and subjects.
    pub fn references(&self) -> ReferenceData {
        ReferenceData::build(&self.groups, &self.teachers, &self.roles, &self.subjects)
    }

    /// Hands the sessions to a new store.
    pub fn store(&self, config: &TimetableConfig) -> SessionStore {
        SessionStore::load(self.sessions.clone(), config)
    }
}

/// Parses the first collection found under `keys`.
///
/// A record that does not deserialize is replaced by `fallback()`, or
/// dropped when that returns `None`.
fn collection<T: DeserializeOwned>(
    root: &Map<String, Value>,
    keys: &[&str],
    fallback: fn() -> Option<T>,
) -> Vec<T> {
    let Some((key, value)) = keys
        .iter()
        .find_map(|&k| root.get(k).map(|v| (k, v)))
    else {
        tracing::warn!(collection = keys[0], "collection missing, using empty");
        return Vec::new();
    };

    let Value::Array(items) = value else {
        tracing::warn!(
            collection = key,
            found = kind_of(value),
            "collection is not an array, using empty"
        );
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let parsed = if item.is_object() {
                T::deserialize(item).map_err(|err| err.to_string())
            } else {
                Err(format!("expected object, found {}", kind_of(item)))
            };
            match parsed {
                Ok(record) => Some(record),
                Err(error) => {
                    let record = fallback();
                    tracing::warn!(
                        collection = key,
                        index,
                        %error,
                        kept = record.is_some(),
                        "malformed record"
                    );
                    record
                }
            }
        })
        .collect()
}

fn skip<T>() -> Option<T> {
    None
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
