//! SecretMap type.
//!
//! Ordered key/value pairs parsed from .env text.

use std::collections::HashMap;

use zeroize::Zeroize;

use crate::core::types::SecretName;

/// Secrets parsed from one .env input.
///
/// Keys are unique and iterate in first-insertion order. Inserting an
/// existing key replaces its value in place. Values are zeroized on drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretMap {
    entries: Vec<(SecretName, String)>,
    index: HashMap<SecretName, usize>,
}

impl SecretMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any existing value for `key`.
    ///
    /// Returns `true` if an earlier value was overwritten.
    pub fn insert(&mut self, key: impl Into<SecretName>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();

        match self.index.get(&key).copied() {
            Some(pos) => {
                let existing = &mut self.entries[pos].1;
                existing.zeroize();
                *existing = value;
                true
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                false
            }
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Keys in iteration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over `(key, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Drop for SecretMap {
    fn drop(&mut self) {
        for (_, value) in &mut self.entries {
            value.zeroize();
        }
    }
}
