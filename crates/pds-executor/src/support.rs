//! Executor configuration facade
//!
//! [`ExecutorConfigSupport`] answers typed questions about one validated
//! executor configuration: polling, timeouts, certificate trust, forbidden
//! network targets and the job parameters sent to the PDS.

use std::fmt;
use std::sync::Arc;

use pds_keys::{builtin, parse_flag, ConfigKey, KeyRegistry, NetworkTargetType};
use pds_params::{
    resolve, JobParameterFactory, MappingStore, RawConfiguration, ResolvedParameters,
};

use crate::config::{ConfigurationSource, ExecutorConfig};
use crate::env::EnvironmentVariableSupport;
use crate::error::ExecutorError;
use crate::setup::InstallSetup;
use crate::validation::MinimumConfigValidation;

/// Integer parameter value meaning "not configured"
pub const UNSET: i32 = -1;

/// Collaborators shared by all executor configurations of a host
#[derive(Clone)]
pub struct ServiceCollection {
    mappings: Arc<dyn MappingStore>,
    environment: Arc<dyn EnvironmentVariableSupport>,
}

impl fmt::Debug for ServiceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCollection").finish_non_exhaustive()
    }
}

impl ServiceCollection {
    /// Create service collection
    #[must_use]
    pub fn new(
        mappings: Arc<dyn MappingStore>,
        environment: Arc<dyn EnvironmentVariableSupport>,
    ) -> Self {
        Self {
            mappings,
            environment,
        }
    }

    /// Mapping store
    #[inline]
    #[must_use]
    pub fn mappings(&self) -> &dyn MappingStore {
        self.mappings.as_ref()
    }

    /// Environment variable support
    #[inline]
    #[must_use]
    pub fn environment(&self) -> &dyn EnvironmentVariableSupport {
        self.environment.as_ref()
    }
}

/// Server access data for a network target
pub trait NetworkTargetDataProvider {
    /// Identifier of the server
    fn identifier(&self, target: NetworkTargetType) -> String;

    /// Base URL of the server
    fn base_url(&self, target: NetworkTargetType) -> String;

    /// User name, `None` if it references an unset variable
    fn username(&self, target: NetworkTargetType) -> Option<String>;

    /// Password or API token, `None` if it references an unset variable
    fn password(&self, target: NetworkTargetType) -> Option<String>;

    /// Whether an untrusted server certificate is accepted
    fn has_untrusted_certificate(&self, target: NetworkTargetType) -> bool;
}

/// Typed view of one validated executor configuration
///
/// Executor-side keys are internal and never reach the outbound map, so
/// accessors read the configured parameters (case-insensitively) and fall
/// back to the key's default.
pub struct ExecutorConfigSupport {
    config: ExecutorConfig,
    raw: RawConfiguration,
    configured: ResolvedParameters,
    services: ServiceCollection,
}

impl fmt::Debug for ExecutorConfigSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorConfigSupport")
            .field("executor", &self.config.name)
            .field("parameters", &self.raw.len())
            .finish_non_exhaustive()
    }
}

impl ExecutorConfigSupport {
    /// Validate the configuration and build the facade
    ///
    /// # Errors
    /// Returns [`ExecutorError::ConfigurationInvalid`] listing every problem
    pub fn create_and_validate(
        config: ExecutorConfig,
        services: ServiceCollection,
    ) -> Result<Self, ExecutorError> {
        let raw = config.configured_parameters();
        // empty registry knows no key, so every entry is kept
        let configured = resolve(&raw, &KeyRegistry::default());

        MinimumConfigValidation.validate(&config, &configured)?;

        tracing::debug!(
            "Executor configuration {} (version {}) accepted with {} parameters",
            config.name,
            config.executor_version,
            raw.len()
        );
        Ok(Self {
            config,
            raw,
            configured,
            services,
        })
    }

    /// Underlying configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Configured value of a key, or the key's default
    #[must_use]
    pub fn parameter(&self, key: &ConfigKey) -> Option<&str> {
        self.configured.value_of(key).or(key.default_value())
    }

    /// Boolean value of a key, `true` only for `true` in any case
    #[must_use]
    pub fn flag(&self, key: &ConfigKey) -> bool {
        parse_flag(self.parameter(key))
    }

    fn int_parameter(&self, key: &ConfigKey) -> i32 {
        let Some(value) = self.parameter(key) else {
            return UNSET;
        };
        match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(
                    "Parameter {} of executor {} is not an integer: {}",
                    key.id(),
                    self.config.name,
                    value
                );
                UNSET
            }
        }
    }

    /// Milliseconds between two job state checks
    ///
    /// The install default applies only when the value is unset.
    #[must_use]
    pub fn poll_interval_millis(&self, setup: &dyn InstallSetup) -> i32 {
        match self.int_parameter(&builtin::TIME_TO_WAIT_NEXT_CHECK_MILLIS) {
            UNSET => setup.default_poll_interval_millis(),
            value => value,
        }
    }

    /// Minutes until a job times out
    #[must_use]
    pub fn timeout_minutes(&self, setup: &dyn InstallSetup) -> i32 {
        match self.int_parameter(&builtin::TIMEOUT_MINUTES) {
            UNSET => setup.default_timeout_minutes(),
            value => value,
        }
    }

    /// Whether the executor trusts every PDS server certificate
    #[must_use]
    pub fn trust_all_certificates(&self) -> bool {
        self.flag(&builtin::TRUST_ALL_CERTIFICATES)
    }

    /// Whether scans against `target` are forbidden
    ///
    /// The first forbidding key set to `true` decides.
    #[must_use]
    pub fn is_target_type_forbidden(&self, target: NetworkTargetType) -> bool {
        let forbidden = KeyRegistry::remote_parameters()
            .forbidding(target)
            .any(|key| self.flag(key));
        if forbidden {
            tracing::info!(
                "Executor {} forbids network target type {}",
                self.config.name,
                target
            );
        }
        forbidden
    }

    /// Product identifier used by the PDS
    #[must_use]
    pub fn product_identifier(&self) -> Option<&str> {
        self.parameter(&builtin::PRODUCT_IDENTIFIER)
    }

    /// Whether the PDS reuses the orchestrator's storage
    #[must_use]
    pub fn is_reusing_storage(&self) -> bool {
        pds_params::is_reusing_storage_for(&self.raw)
    }

    /// Whether the PDS launcher script trusts all certificates
    #[must_use]
    pub fn is_script_trusting_all_certificates(&self) -> bool {
        self.flag(&builtin::SCRIPT_TRUSTALL_CERTIFICATES_ENABLED)
    }

    /// Parameters sent to the PDS for a job of `project_id`
    #[must_use]
    pub fn create_job_parameters(&self, project_id: &str) -> ResolvedParameters {
        JobParameterFactory::new(self.services.mappings()).create(&self.raw, project_id)
    }
}

// Same server for every target type
impl NetworkTargetDataProvider for ExecutorConfigSupport {
    fn identifier(&self, _target: NetworkTargetType) -> String {
        self.config.name.clone()
    }

    fn base_url(&self, _target: NetworkTargetType) -> String {
        self.config.setup.base_url.clone()
    }

    fn username(&self, _target: NetworkTargetType) -> Option<String> {
        self.services
            .environment()
            .value_or_variable(&self.config.setup.credentials.user)
    }

    fn password(&self, _target: NetworkTargetType) -> Option<String> {
        self.services
            .environment()
            .value_or_variable(&self.config.setup.credentials.password)
    }

    fn has_untrusted_certificate(&self, _target: NetworkTargetType) -> bool {
        self.trust_all_certificates()
    }
}
