//! Product executor configuration
//!
//! The stored configuration of one PDS executor instance: identity, server
//! setup and the free-form job parameter list.

use pds_params::RawConfiguration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of the configured parameters of one executor instance
pub trait ConfigurationSource {
    /// Configured parameters, sorted by key
    fn configured_parameters(&self) -> RawConfiguration;
}

/// Stored configuration of a product executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorConfig {
    /// Configuration identifier
    pub uuid: Uuid,
    /// Configuration name, also used as server identifier
    #[serde(default)]
    pub name: String,
    /// Executor implementation version
    #[serde(default = "default_executor_version")]
    pub executor_version: u32,
    /// Disabled configurations are rejected by validation
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Server setup
    #[serde(default)]
    pub setup: ExecutorSetup,
}

fn default_executor_version() -> u32 {
    1
}

fn default_enabled() -> bool {
    true
}

impl ExecutorConfig {
    /// Create configuration with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            executor_version: default_executor_version(),
            enabled: default_enabled(),
            setup: ExecutorSetup::default(),
        }
    }

    /// Enable or disable the configuration
    #[inline]
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// With PDS base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.setup.base_url = base_url.into();
        self
    }

    /// With credentials
    #[inline]
    #[must_use]
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.setup.credentials = Credentials {
            user: user.into(),
            password: password.into(),
        };
        self
    }

    /// Append job parameter
    #[inline]
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.setup.job_parameters.push(JobParameter {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Parse from JSON
    ///
    /// # Errors
    /// Returns error if JSON is invalid
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ConfigurationSource for ExecutorConfig {
    /// Later duplicates of a key replace earlier ones
    fn configured_parameters(&self) -> RawConfiguration {
        self.setup
            .job_parameters
            .iter()
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect()
    }
}

/// Server setup of an executor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorSetup {
    /// PDS base URL
    #[serde(rename = "baseURL", default)]
    pub base_url: String,
    /// Server credentials
    #[serde(default)]
    pub credentials: Credentials,
    /// Free-form job parameters
    #[serde(default)]
    pub job_parameters: Vec<JobParameter>,
}

/// User and password (or API token); values may be `env:NAME` references
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// User name
    #[serde(default)]
    pub user: String,
    /// Password or API token
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Key/value job parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParameter {
    /// Parameter key
    pub key: String,
    /// Parameter value
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_json_shape() {
        let json = r#"{
            "uuid": "8a3f5b58-2bd1-4a8a-9b39-0a2b5e9f2d11",
            "name": "pds-gosec",
            "executorVersion": 2,
            "setup": {
                "baseURL": "https://pds.example.org",
                "credentials": {"user": "env:PDS_USER", "password": "secret"},
                "jobParameters": [
                    {"key": "pds.config.productidentifier", "value": "PDS_GOSEC"}
                ]
            }
        }"#;
        let config = ExecutorConfig::from_json(json).unwrap();

        assert_eq!(config.name, "pds-gosec");
        assert_eq!(config.executor_version, 2);
        assert!(config.enabled);
        assert_eq!(config.setup.base_url, "https://pds.example.org");
        assert_eq!(config.setup.credentials.user, "env:PDS_USER");
        assert_eq!(config.setup.job_parameters.len(), 1);
    }

    #[test]
    fn omitted_fields_use_defaults() {
        let config =
            ExecutorConfig::from_json(r#"{"uuid": "8a3f5b58-2bd1-4a8a-9b39-0a2b5e9f2d11"}"#).unwrap();
        assert_eq!(config.executor_version, 1);
        assert!(config.enabled);
        assert!(config.setup.job_parameters.is_empty());
    }

    #[test]
    fn configured_parameters_sorted_last_duplicate_wins() {
        let config = ExecutorConfig::new("x")
            .with_parameter("b", "1")
            .with_parameter("a", "2")
            .with_parameter("b", "3");
        let raw = config.configured_parameters();

        let entries: Vec<_> = raw.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("a", "2"), ("b", "3")]);
    }

    #[test]
    fn credentials_debug_hides_password() {
        let config = ExecutorConfig::new("x").with_credentials("user", "topsecret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("topsecret"));
        assert!(debug.contains("user"));
    }
}
