/// Metadata tag types and the in-memory tag store
use crate::traits::TagStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical key for the release year tag
pub const TAG_YEAR: &str = "Year";

/// Which metadata tag dialect a container carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagDialect {
    /// No valid tag block
    None,

    /// ID3v1 tag block; values never embed NUL bytes
    Id3v1,

    /// APEv2 tag block; one item's value may hold several NUL-separated
    /// sub-values
    Ape,
}

impl TagDialect {
    /// Whether values in this dialect may embed NUL-separated sub-values
    pub fn is_multi_value(self) -> bool {
        matches!(self, Self::Ape)
    }
}

/// In-memory tag store with clear-then-upsert semantics
///
/// Reference `TagStore` implementation; hosts with their own metadata model
/// implement the trait directly instead. Keys are matched exactly and
/// iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDictionary {
    entries: BTreeMap<String, String>,
}

impl TagDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value stored under exactly `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl TagStore for TagDictionary {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_existing_key() {
        let mut tags = TagDictionary::new();
        tags.set("Artist", "X");
        tags.set("Artist", "Y");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("Artist"), Some("Y"));
    }

    #[test]
    fn contains_matches_exact_key_only() {
        let mut tags = TagDictionary::new();
        tags.set(TAG_YEAR, "1999");
        assert!(tags.contains("Year"));
        assert!(!tags.contains("YEAR"));
    }

    #[test]
    fn clear_empties_the_store() {
        let mut tags = TagDictionary::new();
        tags.set("Title", "a");
        tags.set("Album", "b");
        tags.clear();
        assert!(tags.is_empty());
    }

    #[test]
    fn only_ape_is_multi_value() {
        assert!(TagDialect::Ape.is_multi_value());
        assert!(!TagDialect::Id3v1.is_multi_value());
        assert!(!TagDialect::None.is_multi_value());
    }
}
