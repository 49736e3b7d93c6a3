//! # Message Records
//!
//! A [`MessageRecord`] maps a dotted path key to the ordered list of failure
//! messages reported for that location. A record with zero keys means the
//! validated value passed.
//!
//! Keys are kept in a `BTreeMap` so records serialize, compare and print
//! identically across runs. Message order within a key is insertion order.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::Path;

/// Path-keyed collection of human-readable validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageRecord(BTreeMap<String, Vec<String>>);

impl MessageRecord {
    /// An empty (passing) record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record holding one message at `path`.
    pub fn single(path: &Path, message: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(path, message);
        record
    }

    /// Append `message` to the list at `path.key()`, creating the list if absent.
    pub fn insert(&mut self, path: &Path, message: impl Into<String>) {
        self.0.entry(path.key()).or_default().push(message.into());
    }

    /// Return a new record containing the messages of `self` followed by those
    /// of `other`, per key. Keys unique to either side pass through unchanged.
    pub fn append(&self, other: &MessageRecord) -> MessageRecord {
        let mut merged = self.clone();
        merged.extend(other.clone());
        merged
    }

    /// In-place form of [`append`](Self::append).
    pub fn extend(&mut self, other: MessageRecord) {
        for (key, messages) in other.0 {
            self.0.entry(key).or_default().extend(messages);
        }
    }

    /// True when no key carries a message (the pass signal).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys with at least one message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded under a dotted key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// True when `key` has messages.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(key, messages)` pairs, sorted by key.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// Consume the record and return the inner map.
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl IntoIterator for MessageRecord {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageRecord {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MessageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, messages)) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}: {}", key, messages.join("; "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = MessageRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }

    #[test]
    fn insert_appends_under_dotted_key() {
        let path = Path::new(["user", "email"]);
        let mut record = MessageRecord::new();
        record.insert(&path, "email is required");
        record.insert(&path, "email must be a string");

        assert!(!record.is_empty());
        assert_eq!(
            record.get("user.email"),
            Some(&["email is required".to_string(), "email must be a string".to_string()][..])
        );
    }

    #[test]
    fn append_keeps_left_messages_first() {
        let path = Path::new(["name"]);
        let left = MessageRecord::single(&path, "first");
        let right = MessageRecord::single(&path, "second");

        let merged = left.append(&right);
        assert_eq!(
            merged.get("name"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
        // Inputs are untouched.
        assert_eq!(left.get("name").map(<[String]>::len), Some(1));
        assert_eq!(right.get("name").map(<[String]>::len), Some(1));
    }

    #[test]
    fn append_passes_through_unique_keys() {
        let left = MessageRecord::single(&Path::new(["a"]), "a failed");
        let right = MessageRecord::single(&Path::new(["b"]), "b failed");

        let merged = left.append(&right);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains_key("a"));
        assert!(merged.contains_key("b"));
    }

    #[test]
    fn serializes_as_object_of_arrays() {
        let record = MessageRecord::single(&Path::new(["data", "status"]), "status is required");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"data.status": ["status is required"]})
        );
    }

    #[test]
    fn display_lists_each_key() {
        let mut record = MessageRecord::single(&Path::new(["a"]), "a failed");
        record.insert(&Path::new(["b"]), "b failed");
        let display = record.to_string();
        assert!(display.contains("a: a failed"));
        assert!(display.contains("b: b failed"));
    }
}
