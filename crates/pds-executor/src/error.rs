//! Error types for the PDS executor
//!
//! Only [`ExecutorError::ConfigurationInvalid`] aborts an invocation before
//! any remote call. Missing mappings, malformed metadata and unknown keys are
//! absorbed where they occur.

use pds_continuity::PersistError;

/// Main executor error type
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    /// Executor configuration failed minimum validation
    #[error("configuration of executor '{executor}' is invalid: {}", .problems.join("; "))]
    ConfigurationInvalid {
        /// Executor configuration name
        executor: String,
        /// All problems found
        problems: Vec<String>,
    },

    /// Install setup could not be loaded
    #[error("install setup error: {0}")]
    InstallSetup(#[from] InstallSetupError),

    /// Result could not be persisted
    #[error("persistence failed: {0}")]
    Persist(#[from] PersistError),
}

impl ExecutorError {
    /// Check if the configuration was rejected
    #[inline]
    #[must_use]
    pub fn is_configuration_invalid(&self) -> bool {
        matches!(self, Self::ConfigurationInvalid { .. })
    }
}

/// Install setup loading errors
#[derive(Debug, thiserror::Error)]
pub enum InstallSetupError {
    /// Setup file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// IO error
        #[source]
        source: std::io::Error,
    },

    /// Setup content is not valid TOML
    #[error("invalid install setup: {0}")]
    InvalidToml(#[from] toml::de::Error),
}
