//! Ordered, collision-free map of camel case style keys to values.

use core::mem;
use serde::ser::{Serialize, SerializeMap as _, Serializer};
use std::collections::HashMap;

/// Parsed inline style: camel case property name to value.
///
/// Iteration follows first insertion; re-inserting a key replaces its value in place,
/// matching source-order behavior for duplicate declarations within one block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl StyleMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for this key if there was one.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        if let Some(&position) = self.index.get(&key)
            && let Some(entry) = self.entries.get_mut(position)
        {
            return Some(mem::replace(&mut entry.1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let position = *self.index.get(key)?;
        self.entries.get(position).map(|(_, value)| value.as_str())
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Convert into an unordered `HashMap`.
    pub fn into_hash_map(self) -> HashMap<String, String> {
        self.entries.into_iter().collect()
    }
}

impl FromIterator<(String, String)> for StyleMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}
