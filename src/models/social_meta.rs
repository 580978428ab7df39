//! Ordered mapping of extra `og:*` / `twitter:*` meta entries.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered `tag key -> content` mapping.
///
/// Keys keep the position of their first occurrence; inserting an existing key
/// replaces its value in place. Entries live in a `Vec`; `positions` maps each
/// key to its index so inserts and lookups stay constant-time on pages with
/// thousands of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialMetaMap {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl SocialMetaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a map with `key` set to `value`.
    ///
    /// Consumes and returns `self` so the map can be built with a fold.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.positions.get(&key) {
            Some(&index) => self.entries[index].1 = value,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.positions
            .get(key)
            .map(|&index| self.entries[index].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for SocialMetaMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
