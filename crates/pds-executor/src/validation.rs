//! Minimum configuration validation
//!
//! Collects every problem of an executor configuration before rejecting it.

use pds_keys::ids;
use pds_params::ResolvedParameters;

use crate::config::ExecutorConfig;
use crate::error::ExecutorError;

/// Checks an executor configuration can be used for a PDS job
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumConfigValidation;

impl MinimumConfigValidation {
    /// Problems found, empty when the configuration is usable
    ///
    /// `configured` is the case-insensitive view of the configured parameters.
    #[must_use]
    pub fn problems(&self, config: &ExecutorConfig, configured: &ResolvedParameters) -> Vec<String> {
        let mut problems = Vec::new();

        if config.name.trim().is_empty() {
            problems.push("executor name is missing".to_string());
        }
        if !config.enabled {
            problems.push("executor configuration is disabled".to_string());
        }
        if config.setup.base_url.trim().is_empty() {
            problems.push("base URL is missing".to_string());
        }

        let product_identifier = configured.value_of(&pds_keys::builtin::PRODUCT_IDENTIFIER);
        if product_identifier.map_or(true, |value| value.trim().is_empty()) {
            problems.push(format!("parameter '{}' is missing", ids::PRODUCT_IDENTIFIER));
        }

        for key in [
            &pds_keys::builtin::TIME_TO_WAIT_NEXT_CHECK_MILLIS,
            &pds_keys::builtin::TIMEOUT_MINUTES,
        ] {
            if let Some(value) = configured.value_of(key) {
                if value.trim().parse::<i32>().is_err() {
                    problems.push(format!("parameter '{}' is not an integer: '{}'", key.id(), value));
                }
            }
        }

        problems
    }

    /// Fail with all problems at once
    ///
    /// # Errors
    /// Returns [`ExecutorError::ConfigurationInvalid`] when any problem is found
    pub fn validate(
        &self,
        config: &ExecutorConfig,
        configured: &ResolvedParameters,
    ) -> Result<(), ExecutorError> {
        let problems = self.problems(config, configured);
        if problems.is_empty() {
            return Ok(());
        }

        tracing::warn!(
            "Executor configuration {} rejected: {}",
            config.name,
            problems.join("; ")
        );
        Err(ExecutorError::ConfigurationInvalid {
            executor: config.name.clone(),
            problems,
        })
    }
}
