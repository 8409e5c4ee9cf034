//! Key registry
//!
//! Provides [`KeyRegistry`], a read-only lookup table over `'static` key
//! definitions. The process-wide views are built lazily once and shared.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::builtin::{CONFIG_DATA_KEYS, EXECUTOR_KEYS, USE_SECHUB_STORAGE};
use crate::key::{ConfigKey, NetworkTargetType};

static REMOTE_PARAMETERS: Lazy<KeyRegistry> = Lazy::new(|| {
    KeyRegistry::new(EXECUTOR_KEYS.iter().chain(CONFIG_DATA_KEYS).copied())
});

static STORAGE_DETECTION: Lazy<KeyRegistry> =
    Lazy::new(|| KeyRegistry::new([&USE_SECHUB_STORAGE]));

/// Immutable set of recognised configuration keys
///
/// Lookup is case-insensitive. When two definitions share an identifier the
/// first one wins.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    keys: Vec<&'static ConfigKey>,
    index: HashMap<String, usize>,
}

impl KeyRegistry {
    /// Build a registry from key definitions
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = &'static ConfigKey>) -> Self {
        let mut registry = Self::default();
        for key in keys {
            let normalized = key.id().to_ascii_lowercase();
            if registry.index.contains_key(&normalized) {
                continue;
            }
            registry.index.insert(normalized, registry.keys.len());
            registry.keys.push(key);
        }
        registry
    }

    /// All keys known for job parameter creation
    #[inline]
    #[must_use]
    pub fn remote_parameters() -> &'static KeyRegistry {
        &REMOTE_PARAMETERS
    }

    /// Narrow view holding only the storage reuse key
    #[inline]
    #[must_use]
    pub fn storage_detection() -> &'static KeyRegistry {
        &STORAGE_DETECTION
    }

    /// Find key by identifier, ignoring case
    #[inline]
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&'static ConfigKey> {
        self.index
            .get(&identifier.to_ascii_lowercase())
            .map(|&position| self.keys[position])
    }

    /// Check if an identifier is known
    #[inline]
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.lookup(identifier).is_some()
    }

    /// Keys tagged with a forbidden network zone, in declaration order
    pub fn forbidden_target_keys(&self) -> impl Iterator<Item = &'static ConfigKey> + '_ {
        self.iter().filter(|k| k.forbidden_target().is_some())
    }

    /// Keys forbidding the given zone
    pub fn forbidding(
        &self,
        target: NetworkTargetType,
    ) -> impl Iterator<Item = &'static ConfigKey> + '_ {
        self.forbidden_target_keys()
            .filter(move |k| k.forbidden_target() == Some(target))
    }

    /// Iterate keys in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &'static ConfigKey> + '_ {
        self.keys.iter().copied()
    }

    /// Number of keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
