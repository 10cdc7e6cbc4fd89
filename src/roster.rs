//! Teammate registry
//!
//! The roster is the unique, sorted set of teammate names backing the
//! selector. Names are unique under case-insensitive comparison; ordering is
//! ascending by Unicode-lowercase collation key. The stored name keeps its
//! original casing.

use crate::error::{Error, Result};

/// Collation key used for duplicate detection and ordering.
pub fn collate(value: &str) -> String {
    value.to_lowercase()
}

/// The unique, sorted set of teammate names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a teammate.
    ///
    /// The input is trimmed. An empty name is a `Validation` error; a name
    /// that matches an existing entry case-insensitively is a `Duplicate`
    /// error. On success the set is re-sorted.
    pub fn add(&mut self, name: &str) -> Result<&str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation(
                "teammate name cannot be empty".to_string(),
            ));
        }

        let key = collate(name);
        if self.names.iter().any(|existing| collate(existing) == key) {
            return Err(Error::Duplicate(name.to_string()));
        }

        self.names.push(name.to_string());
        self.names.sort_by_key(|name| collate(name));

        let position = self
            .names
            .iter()
            .position(|existing| collate(existing) == key)
            .unwrap_or(0);
        Ok(&self.names[position])
    }

    /// The current ordered names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether `name` is on the roster (case-sensitive, exact stored name).
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Find the stored name matching `name` case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let key = collate(name.trim());
        self.names
            .iter()
            .find(|existing| collate(existing) == key)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Empty the roster. Used by reset.
    pub fn clear(&mut self) {
        self.names.clear();
    }
}
