//! Configuration key definitions
//!
//! A [`ConfigKey`] is a tagged record: identifier, optional default, whether
//! the value travels to the PDS, and an optional forbidden network zone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network zone a scan target belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkTargetType {
    /// Publicly reachable target
    Internet,
    /// Target inside a private network
    Intranet,
    /// Zone could not be determined
    Unknown,
    /// Target address is not allowed at all (e.g. loopback)
    Illegal,
}

impl NetworkTargetType {
    /// Canonical upper-case name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internet => "INTERNET",
            Self::Intranet => "INTRANET",
            Self::Unknown => "UNKNOWN",
            Self::Illegal => "ILLEGAL",
        }
    }

    /// Whether a scan of this zone can be performed at all
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Internet | Self::Intranet)
    }
}

impl fmt::Display for NetworkTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognised network target type names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network target type: {0}")]
pub struct ParseTargetTypeError(pub String);

impl FromStr for NetworkTargetType {
    type Err = ParseTargetTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Internet, Self::Intranet, Self::Unknown, Self::Illegal]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTargetTypeError(s.to_string()))
    }
}

/// A recognised configuration key
///
/// Keys are declared as `static` items and never change afterwards. Builders
/// are `const fn` so definitions can live in static tables.
///
/// # Example
/// ```
/// use pds_keys::{ConfigKey, NetworkTargetType};
///
/// static KEY: ConfigKey = ConfigKey::new("my.key", "demo key")
///     .internal()
///     .with_default("false")
///     .forbids(NetworkTargetType::Intranet);
///
/// assert!(!KEY.is_sent_to_remote());
/// assert!(KEY.matches("MY.KEY"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKey {
    id: &'static str,
    description: &'static str,
    default_value: Option<&'static str>,
    sent_to_remote: bool,
    forbidden_target: Option<NetworkTargetType>,
}

impl ConfigKey {
    /// Create a key that is forwarded to the remote engine
    #[inline]
    #[must_use]
    pub const fn new(id: &'static str, description: &'static str) -> Self {
        Self {
            id,
            description,
            default_value: None,
            sent_to_remote: true,
            forbidden_target: None,
        }
    }

    /// Mark key as internal-only (never forwarded)
    #[inline]
    #[must_use]
    pub const fn internal(self) -> Self {
        Self {
            sent_to_remote: false,
            ..self
        }
    }

    /// Set default value
    #[inline]
    #[must_use]
    pub const fn with_default(self, value: &'static str) -> Self {
        Self {
            default_value: Some(value),
            ..self
        }
    }

    /// Tag key as the deny switch for a network zone
    #[inline]
    #[must_use]
    pub const fn forbids(self, target: NetworkTargetType) -> Self {
        Self {
            forbidden_target: Some(target),
            ..self
        }
    }

    /// Key identifier as declared
    #[inline]
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Human readable description
    #[inline]
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Default value, if any
    #[inline]
    #[must_use]
    pub const fn default_value(&self) -> Option<&'static str> {
        self.default_value
    }

    /// Whether the value is forwarded to the remote engine
    #[inline]
    #[must_use]
    pub const fn is_sent_to_remote(&self) -> bool {
        self.sent_to_remote
    }

    /// Network zone this key forbids when set to `true`
    #[inline]
    #[must_use]
    pub const fn forbidden_target(&self) -> Option<NetworkTargetType> {
        self.forbidden_target
    }

    /// Case-insensitive identifier comparison
    #[inline]
    #[must_use]
    pub fn matches(&self, identifier: &str) -> bool {
        self.id.eq_ignore_ascii_case(identifier)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_key_is_sent_without_default() {
        let key = ConfigKey::new("a.b", "test");
        assert!(key.is_sent_to_remote());
        assert_eq!(key.default_value(), None);
        assert_eq!(key.forbidden_target(), None);
    }

    #[test]
    fn builders_compose() {
        let key = ConfigKey::new("a.b", "test")
            .internal()
            .with_default("-1")
            .forbids(NetworkTargetType::Internet);

        assert!(!key.is_sent_to_remote());
        assert_eq!(key.default_value(), Some("-1"));
        assert_eq!(key.forbidden_target(), Some(NetworkTargetType::Internet));
        assert_eq!(key.id(), "a.b");
    }

    #[test]
    fn matches_ignores_case() {
        let key = ConfigKey::new("pds.config.Use.Storage", "test");
        assert!(key.matches("PDS.CONFIG.USE.STORAGE"));
        assert!(key.matches("pds.config.use.storage"));
        assert!(!key.matches("pds.config.use"));
    }

    #[test]
    fn target_type_parse() {
        assert_eq!("internet".parse(), Ok(NetworkTargetType::Internet));
        assert_eq!(" INTRANET ".parse(), Ok(NetworkTargetType::Intranet));
        assert!("extranet".parse::<NetworkTargetType>().is_err());
    }

    #[test]
    fn target_type_validity() {
        assert!(NetworkTargetType::Internet.is_valid());
        assert!(NetworkTargetType::Intranet.is_valid());
        assert!(!NetworkTargetType::Unknown.is_valid());
        assert!(!NetworkTargetType::Illegal.is_valid());
    }
}
