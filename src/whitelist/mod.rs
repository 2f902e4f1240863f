//! Persisted whitelist of pinned quick replies.
//!
//! The whitelist is an ordered sequence of `(set name, label)` keys. Order is
//! insertion order and is preserved across save/load; membership is what the
//! rest of the UI cares about. Serialized with camelCase field names so the
//! settings blob matches the shape the chat front-end family uses.

use serde::{Deserialize, Serialize};

/// Key of one pinned reply. The `(set_name, label)` pair is treated as an
/// opaque compound key; uniqueness within a set is the reply source's
/// business, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistEntry {
    pub set_name: String,
    pub label: String,
}

impl WhitelistEntry {
    pub fn new(set_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            set_name: set_name.into(),
            label: label.into(),
        }
    }
}

/// Ordered, duplicate-free store of pinned replies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WhitelistStore {
    entries: Vec<WhitelistEntry>,
}

impl WhitelistStore {
    pub fn contains(&self, set_name: &str, label: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.set_name == set_name && e.label == label)
    }

    /// Append a key. Returns `false` (and leaves the store untouched) if the
    /// key is already present.
    pub fn add(&mut self, set_name: &str, label: &str) -> bool {
        if self.contains(set_name, label) {
            return false;
        }
        self.entries.push(WhitelistEntry::new(set_name, label));
        true
    }

    /// Remove a key. Returns `false` if it was not present.
    pub fn remove(&mut self, set_name: &str, label: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.set_name == set_name && e.label == label));
        self.entries.len() < before
    }

    pub fn entries(&self) -> &[WhitelistEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&WhitelistEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
