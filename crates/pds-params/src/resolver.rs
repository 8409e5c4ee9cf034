//! Parameter resolution
//!
//! Two stages: filter the raw configuration against a [`KeyRegistry`], then
//! expand the result with the shared storage path and mapping documents.

use std::collections::BTreeMap;

use pds_keys::builtin::{SECHUB_STORAGE_PATH, USE_SECHUB_MAPPINGS};
use pds_keys::KeyRegistry;

use crate::mapping::{MappingStore, EMPTY_MAPPING_JSON};
use crate::resolved::{RawConfiguration, ResolvedParameters};
use crate::storage::{is_reusing_storage, storage_path_for};

/// Filter raw configuration against a registry
///
/// An entry is kept when its key is unknown to the registry or the matching
/// key is sent to the remote engine. Original key spelling is preserved.
#[must_use]
pub fn resolve(raw: &RawConfiguration, registry: &KeyRegistry) -> ResolvedParameters {
    let entries = raw
        .iter()
        .filter(|(key, _)| registry.lookup(key).map_or(true, |k| k.is_sent_to_remote()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    ResolvedParameters::from_map(entries)
}

/// Split a comma separated value into trimmed, non-empty items
#[must_use]
pub fn comma_separated(value: Option<&str>) -> Vec<&str> {
    value
        .map(|v| v.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

/// Builds the job parameters sent to the PDS
///
/// Resolution is deterministic: the same raw configuration and mapping store
/// snapshot always produce the same map.
#[derive(Clone, Copy)]
pub struct JobParameterFactory<'a> {
    registry: &'a KeyRegistry,
    mappings: &'a dyn MappingStore,
}

impl std::fmt::Debug for JobParameterFactory<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobParameterFactory")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl<'a> JobParameterFactory<'a> {
    /// Create factory over the full remote parameter registry
    #[inline]
    #[must_use]
    pub fn new(mappings: &'a dyn MappingStore) -> Self {
        Self {
            registry: KeyRegistry::remote_parameters(),
            mappings,
        }
    }

    /// Use a different registry
    #[inline]
    #[must_use]
    pub fn with_registry(mut self, registry: &'a KeyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Create job parameters for a project
    ///
    /// # Workflow
    /// 1. Filter raw configuration against the registry
    /// 2. Inject the shared storage path when storage is reused
    /// 3. Expand referenced mapping documents
    #[must_use]
    pub fn create(&self, raw: &RawConfiguration, project_id: &str) -> ResolvedParameters {
        let resolved = resolve(raw, self.registry);
        let reuse_storage = is_reusing_storage(&resolved);
        let mapping_ids: Vec<String> = comma_separated(resolved.value_of(&USE_SECHUB_MAPPINGS))
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut entries = resolved.into_inner();

        if reuse_storage {
            entries.insert(SECHUB_STORAGE_PATH.id().to_string(), storage_path_for(project_id));
        }
        self.add_mappings(&mut entries, &mapping_ids);

        ResolvedParameters::from_map(entries)
    }

    fn add_mappings(&self, entries: &mut BTreeMap<String, String>, mapping_ids: &[String]) {
        for mapping_id in mapping_ids.iter().map(String::as_str) {
            if entries.contains_key(mapping_id) {
                tracing::warn!(
                    "Cannot use mapping id {} because it is already used as parameter key, skipping",
                    mapping_id
                );
                continue;
            }
            if self.registry.lookup(mapping_id).is_some_and(|k| !k.is_sent_to_remote()) {
                tracing::warn!(
                    "Cannot use mapping id {} because it names an internal key, skipping",
                    mapping_id
                );
                continue;
            }
            match self.mappings.find_mapping_by_id(mapping_id) {
                Some(mapping) => {
                    tracing::debug!("Adding mapping {} as job parameter", mapping_id);
                    entries.insert(mapping_id.to_string(), mapping.data().to_string());
                }
                None => {
                    tracing::warn!(
                        "Configuration wants to use mapping {}, but it was not found, falling back to empty JSON",
                        mapping_id
                    );
                    entries.insert(mapping_id.to_string(), EMPTY_MAPPING_JSON.to_string());
                }
            }
        }
    }
}
