//! Testing utilities for the PDS executor workspace
//!
//! In-memory collaborators, fixtures and builders shared by the crates'
//! integration tests.

#![allow(missing_docs)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pds_continuity::{MetaData, ResultSink, ScanResult, SinkError};
use pds_executor::{
    EnvironmentVariableSupport, ExecutorConfig, ExecutorConfigSupport, InstallSetup,
    ServiceCollection,
};
use pds_keys::ids;
use pds_params::{MappingDocument, MappingStore};

/// Mapping store backed by a map; counts lookups
#[derive(Debug, Default)]
pub struct InMemoryMappingStore {
    mappings: HashMap<String, String>,
    lookups: AtomicUsize,
}

impl InMemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mapping(mut self, id: &str, data: &str) -> Self {
        self.mappings.insert(id.to_string(), data.to_string());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl MappingStore for InMemoryMappingStore {
    fn find_mapping_by_id(&self, id: &str) -> Option<MappingDocument> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.mappings
            .get(id)
            .map(|data| MappingDocument::new(id, data.clone()))
    }
}

/// Result sink remembering every saved result
#[derive(Debug, Default)]
pub struct RecordingResultSink {
    saved: Mutex<Vec<ScanResult>>,
    failure: Option<String>,
}

impl RecordingResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink rejecting every save with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            saved: Mutex::default(),
            failure: Some(message.to_string()),
        }
    }

    pub fn saved(&self) -> Vec<ScanResult> {
        self.saved.lock().unwrap().clone()
    }
}

impl ResultSink for RecordingResultSink {
    fn save(&self, result: &ScanResult) -> Result<(), SinkError> {
        if let Some(message) = &self.failure {
            return Err(SinkError::new(message.clone()));
        }
        self.saved.lock().unwrap().push(result.clone());
        Ok(())
    }
}

/// Environment with fixed variables
#[derive(Debug, Default, Clone)]
pub struct FakeEnvironment {
    variables: HashMap<String, String>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_variable(mut self, name: &str, value: &str) -> Self {
        self.variables.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvironmentVariableSupport for FakeEnvironment {
    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }
}

/// Install setup with fixed defaults
#[derive(Debug, Clone, Copy)]
pub struct FixedInstallSetup {
    pub poll_interval_millis: i32,
    pub timeout_minutes: i32,
}

impl FixedInstallSetup {
    pub fn new(poll_interval_millis: i32, timeout_minutes: i32) -> Self {
        Self {
            poll_interval_millis,
            timeout_minutes,
        }
    }
}

impl InstallSetup for FixedInstallSetup {
    fn default_poll_interval_millis(&self) -> i32 {
        self.poll_interval_millis
    }

    fn default_timeout_minutes(&self) -> i32 {
        self.timeout_minutes
    }
}

/// Scan result carrying JSON metadata with the given values
pub fn result_with_metadata(findings_ref: &str, values: &[(&str, &str)]) -> ScanResult {
    let metadata = values
        .iter()
        .fold(MetaData::new(), |meta, (k, v)| meta.with_value(*k, *v));
    ScanResult::new(findings_ref).with_metadata(metadata.to_json().unwrap())
}

/// Executor configuration passing minimum validation
pub fn valid_executor_config(name: &str) -> ExecutorConfig {
    ExecutorConfig::new(name)
        .with_base_url("https://pds.example.org")
        .with_credentials("scanner", "secret")
        .with_parameter(ids::PRODUCT_IDENTIFIER, "PDS_TEST")
}

/// Services with the given mapping store and an empty environment
pub fn services_with(mappings: Arc<dyn MappingStore>) -> ServiceCollection {
    ServiceCollection::new(mappings, Arc::new(FakeEnvironment::new()))
}

/// Facade over `config` with an empty mapping store
pub fn support_for(config: ExecutorConfig) -> ExecutorConfigSupport {
    ExecutorConfigSupport::create_and_validate(
        config,
        services_with(Arc::new(InMemoryMappingStore::new())),
    )
    .unwrap()
}

/// Test subscriber writing through the test harness capture
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}
