use std::collections::BTreeMap;

use pds_keys::builtin::{CONFIG_DATA_KEYS, EXECUTOR_KEYS};
use pds_keys::{ids, KeyRegistry};
use pds_params::{
    is_reusing_storage, is_reusing_storage_for, resolve, JobParameterFactory, RawConfiguration,
    EMPTY_MAPPING_JSON,
};
use pds_test_utils::{init_test_tracing, InMemoryMappingStore};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn known_ids() -> Vec<&'static str> {
    EXECUTOR_KEYS
        .iter()
        .chain(CONFIG_DATA_KEYS.iter())
        .map(|k| k.id())
        .collect()
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(known_ids()), any::<bool>()).prop_map(|(id, upper)| {
            if upper {
                id.to_uppercase()
            } else {
                id.to_string()
            }
        }),
        "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}",
    ]
}

fn raw_strategy() -> impl Strategy<Value = RawConfiguration> {
    prop::collection::btree_map(key_strategy(), "[ -~]{0,12}", 0..12)
}

fn config_of(entries: &[(&str, &str)]) -> RawConfiguration {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn full_job_parameter_creation() {
    init_test_tracing();
    let store = InMemoryMappingStore::new().with_mapping("mapping.a", r#"{"entries":[]}"#);
    let raw = config_of(&[
        (ids::USE_SECHUB_STORAGE, "true"),
        (ids::USE_SECHUB_MAPPINGS, "mapping.a, mapping.b"),
        (ids::TIMEOUT_MINUTES, "30"),
        ("custom.key", "kept"),
    ]);

    let params = JobParameterFactory::new(&store).create(&raw, "alpha");

    let expected: BTreeMap<String, String> = config_of(&[
        (ids::USE_SECHUB_STORAGE, "true"),
        (ids::USE_SECHUB_MAPPINGS, "mapping.a, mapping.b"),
        ("custom.key", "kept"),
        (ids::SECHUB_STORAGE_PATH, "jobstorage/alpha"),
        ("mapping.a", r#"{"entries":[]}"#),
        ("mapping.b", EMPTY_MAPPING_JSON),
    ]);
    assert_eq!(params.as_map(), &expected);
    assert_eq!(store.lookups(), 2);
}

#[test]
fn colliding_mapping_id_keeps_configured_value() {
    let store = InMemoryMappingStore::new().with_mapping("custom.key", "{\"entries\":[]}");
    let raw = config_of(&[
        (ids::USE_SECHUB_MAPPINGS, "custom.key"),
        ("custom.key", "original"),
    ]);

    let params = JobParameterFactory::new(&store).create(&raw, "alpha");

    assert_eq!(params.get("custom.key"), Some("original"));
    assert_eq!(store.lookups(), 0);
}

proptest! {
    #[test]
    fn prop_resolution_keeps_exactly_forwardable_keys(raw in raw_strategy()) {
        let registry = KeyRegistry::remote_parameters();
        let resolved = resolve(&raw, registry);

        for (key, value) in &raw {
            let forwardable = registry.lookup(key).map_or(true, |k| k.is_sent_to_remote());
            prop_assert_eq!(resolved.get(key), forwardable.then_some(value.as_str()));
        }
        prop_assert!(resolved.keys().all(|k| raw.contains_key(k)));
    }

    #[test]
    fn prop_job_parameters_are_idempotent(raw in raw_strategy(), project in "[a-z0-9-]{1,12}") {
        let store = InMemoryMappingStore::new().with_mapping("m1", "{}");
        let factory = JobParameterFactory::new(&store);

        prop_assert_eq!(factory.create(&raw, &project), factory.create(&raw, &project));
    }

    #[test]
    fn prop_internal_keys_never_sent(raw in raw_strategy(), project in "[a-z]{1,8}") {
        let store = InMemoryMappingStore::new();
        let params = JobParameterFactory::new(&store).create(&raw, &project);

        for key in params.keys() {
            let internal = KeyRegistry::remote_parameters()
                .lookup(key)
                .is_some_and(|k| !k.is_sent_to_remote());
            prop_assert!(!internal, "internal key {} was sent", key);
        }
    }

    #[test]
    fn prop_storage_reuse_same_for_full_and_narrow_resolution(
        mut raw in raw_strategy(),
        value in prop_oneof![
            Just("true".to_string()),
            Just("TRUE".to_string()),
            Just("false".to_string()),
            Just(" true".to_string()),
            "[ -~]{0,6}",
        ],
        upper in any::<bool>(),
    ) {
        let key = if upper {
            ids::USE_SECHUB_STORAGE.to_uppercase()
        } else {
            ids::USE_SECHUB_STORAGE.to_string()
        };
        raw.insert(key, value);

        let full = is_reusing_storage(&resolve(&raw, KeyRegistry::remote_parameters()));
        prop_assert_eq!(full, is_reusing_storage_for(&raw));
    }
}
