//! Environment variable references in configuration values
//!
//! A value of the form `env:NAME` is replaced by the content of variable
//! `NAME`; any other value is used as is.

const ENV_PREFIX: &str = "env:";

/// Resolves `env:NAME` references
pub trait EnvironmentVariableSupport: Send + Sync {
    /// Content of an environment variable
    fn variable(&self, name: &str) -> Option<String>;

    /// Value itself, or the referenced variable's content
    ///
    /// An unset variable resolves to `None`.
    fn value_or_variable(&self, value: &str) -> Option<String> {
        match value.strip_prefix(ENV_PREFIX) {
            Some(name) => {
                let resolved = self.variable(name);
                if resolved.is_none() {
                    tracing::warn!("Environment variable {} is not set", name);
                }
                resolved
            }
            None => Some(value.to_string()),
        }
    }
}

/// Process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl EnvironmentVariableSupport for SystemEnvironment {
    fn variable(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
