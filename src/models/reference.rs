//! Reference data: groups, teachers and subjects.
//!
//! Each collection is a flat list of `{id, name}` records (subjects use
//! `subjectId` as their key). Lookups go through a [`ReferenceIndex`],
//! built once per load and never mutated afterwards.
//!
//! # Duplicate keys
//! The last record with a given key wins. No error is raised.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A record that can be indexed by key.
pub trait Keyed {
    /// The lookup key, if the record has one.
    fn key(&self) -> Option<&str>;

    /// Display name, if any.
    fn display_name(&self) -> Option<&str>;
}

/// A named reference record (group, teacher, staff role).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Unique identifier.
    #[serde(default)]
    pub id: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Reference {
    /// Creates a record with an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }
}

impl Keyed for Reference {
    fn key(&self) -> Option<&str> {
        Some(self.id.as_str()).filter(|k| !k.is_empty())
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A subject record, keyed by `subjectId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Subject code.
    #[serde(default, alias = "id")]
    pub subject_id: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Subject {
    /// Creates a subject record.
    pub fn new(subject_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            name: Some(name.into()),
        }
    }
}

impl Keyed for Subject {
    fn key(&self) -> Option<&str> {
        Some(self.subject_id.as_str()).filter(|k| !k.is_empty())
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Key → record lookup over one reference collection.
#[derive(Debug, Clone)]
pub struct ReferenceIndex<T> {
    by_key: HashMap<String, T>,
}

impl<T> Default for ReferenceIndex<T> {
    fn default() -> Self {
        Self {
            by_key: HashMap::new(),
        }
    }
}

impl<T: Keyed + Clone> ReferenceIndex<T> {
    /// Builds an index from records. Later records override earlier ones
    /// with the same key; records without a key are skipped.
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut by_key = HashMap::new();
        for record in records {
            if let Some(key) = record.key() {
                by_key.insert(key.to_string(), record.clone());
            }
        }
        Self { by_key }
    }
}

impl<T: Keyed> ReferenceIndex<T> {
    /// Looks up a record.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.by_key.get(key)
    }

    /// Whether a key is present. Absent or empty keys are never present.
    pub fn contains(&self, key: Option<&str>) -> bool {
        key.is_some_and(|k| self.by_key.contains_key(k))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether the index has no records.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Resolves a display name: the record's name, else the id itself,
    /// else empty text.
    pub fn name_or_id<'a>(&'a self, key: Option<&'a str>) -> &'a str {
        match key {
            Some(k) => self
                .get(k)
                .and_then(|r| r.display_name())
                .filter(|n| !n.is_empty())
                .unwrap_or(k),
            None => "",
        }
    }
}

/// The three reference indexes consulted by validation and display.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// Groups (classes) by id.
    pub groups: ReferenceIndex<Reference>,
    /// Teachers and staff roles by id.
    pub teachers: ReferenceIndex<Reference>,
    /// Subjects by code.
    pub subjects: ReferenceIndex<Subject>,
}

impl ReferenceData {
    /// Builds indexes from flat collections.
    ///
    /// Staff roles are merged into the teacher index after the teachers,
    /// so a role sharing a teacher's id overrides it.
    pub fn build(
        groups: &[Reference],
        teachers: &[Reference],
        roles: &[Reference],
        subjects: &[Subject],
    ) -> Self {
        Self {
            groups: ReferenceIndex::build(groups),
            teachers: ReferenceIndex::build(teachers.iter().chain(roles)),
            subjects: ReferenceIndex::build(subjects),
        }
    }
}
