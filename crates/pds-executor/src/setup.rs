//! Install-level setup
//!
//! Defaults that apply when an executor configuration leaves a value unset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InstallSetupError;

/// Install-level defaults for PDS executors
pub trait InstallSetup: Send + Sync {
    /// Default milliseconds between two job state checks
    fn default_poll_interval_millis(&self) -> i32;

    /// Default minutes until a job times out
    fn default_timeout_minutes(&self) -> i32;
}

/// TOML backed install setup
///
/// ```toml
/// default_poll_interval_millis = 5000
/// default_timeout_minutes = 60
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdsInstallSetup {
    /// Default poll interval in milliseconds
    pub default_poll_interval_millis: i32,
    /// Default timeout in minutes
    pub default_timeout_minutes: i32,
}

impl Default for PdsInstallSetup {
    fn default() -> Self {
        Self {
            default_poll_interval_millis: 10_000,
            default_timeout_minutes: 240,
        }
    }
}

impl PdsInstallSetup {
    /// Create default setup
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With poll interval
    #[inline]
    #[must_use]
    pub fn with_poll_interval_millis(mut self, millis: i32) -> Self {
        self.default_poll_interval_millis = millis;
        self
    }

    /// With timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_minutes(mut self, minutes: i32) -> Self {
        self.default_timeout_minutes = minutes;
        self
    }

    /// Parse from TOML; missing fields keep their defaults
    ///
    /// # Errors
    /// Returns error if TOML is invalid
    pub fn from_toml_str(content: &str) -> Result<Self, InstallSetupError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InstallSetupError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InstallSetupError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

impl InstallSetup for PdsInstallSetup {
    fn default_poll_interval_millis(&self) -> i32 {
        self.default_poll_interval_millis
    }

    fn default_timeout_minutes(&self) -> i32 {
        self.default_timeout_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let setup = PdsInstallSetup::new();
        assert_eq!(setup.default_poll_interval_millis(), 10_000);
        assert_eq!(setup.default_timeout_minutes(), 240);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let setup = PdsInstallSetup::from_toml_str("default_timeout_minutes = 30").unwrap();
        assert_eq!(setup.default_timeout_minutes, 30);
        assert_eq!(setup.default_poll_interval_millis, 10_000);
    }

    #[test]
    fn invalid_toml_is_error() {
        let err = PdsInstallSetup::from_toml_str("default_timeout_minutes = \"soon\"").unwrap_err();
        assert!(matches!(err, InstallSetupError::InvalidToml(_)));
    }

    #[test]
    fn from_file_reads_setup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_poll_interval_millis = 500").unwrap();

        let setup = PdsInstallSetup::from_file(file.path()).unwrap();
        assert_eq!(setup.default_poll_interval_millis, 500);
    }

    #[test]
    fn from_missing_file_is_io_error() {
        let err = PdsInstallSetup::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, InstallSetupError::Io { .. }));
    }
}
