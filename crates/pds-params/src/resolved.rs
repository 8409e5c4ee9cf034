//! Resolved parameter map
//!
//! [`ResolvedParameters`] is the outbound job parameter set. It is sorted by
//! key so requests built from it are reproducible.

use std::collections::BTreeMap;

use pds_keys::ConfigKey;
use serde::Serialize;

/// Raw executor configuration, key to value, sorted by key
pub type RawConfiguration = BTreeMap<String, String>;

/// Final parameter set sent to the PDS
///
/// Built by the resolver and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedParameters {
    entries: BTreeMap<String, String>,
}

impl ResolvedParameters {
    #[inline]
    pub(crate) fn from_map(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Value stored under exactly this key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for a registry key, matching the identifier case-insensitively
    ///
    /// An exact match is preferred; otherwise the first entry in key order
    /// whose identifier matches is used.
    #[must_use]
    pub fn value_of(&self, key: &ConfigKey) -> Option<&str> {
        self.get(key.id()).or_else(|| {
            self.entries
                .iter()
                .find(|(k, _)| key.matches(k))
                .map(|(_, v)| v.as_str())
        })
    }

    /// Check if key is present
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of parameters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow as map
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Consume into the underlying map
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ResolvedParameters {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
