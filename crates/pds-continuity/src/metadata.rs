//! Result metadata
//!
//! Metadata is stored as JSON: `{"adapterVersion":1,"values":{"key":"value"}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Decoded key/value view of a result's metadata string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(default)]
    adapter_version: u32,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl MetaData {
    /// Create empty metadata
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With adapter version
    #[inline]
    #[must_use]
    pub fn with_adapter_version(mut self, version: u32) -> Self {
        self.adapter_version = version;
        self
    }

    /// With key/value pair
    #[inline]
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Adapter version that wrote the metadata
    #[inline]
    #[must_use]
    pub fn adapter_version(&self) -> u32 {
        self.adapter_version
    }

    /// Value for key
    #[inline]
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check for an exact key/value pair
    #[inline]
    #[must_use]
    pub fn has_value(&self, key: &str, value: &str) -> bool {
        self.value(key) == Some(value)
    }

    /// Serialize to JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Turns raw metadata strings into [`MetaData`]
pub trait MetaDataDecoder: Send + Sync {
    /// Decode, or `None` if the string is malformed
    fn decode(&self, raw: &str) -> Option<MetaData>;
}

/// JSON decoder used by default
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMetaDataDecoder;

impl MetaDataDecoder for JsonMetaDataDecoder {
    fn decode(&self, raw: &str) -> Option<MetaData> {
        match serde_json::from_str(raw) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                tracing::debug!("Ignoring malformed metadata: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_well_formed() {
        let metadata = JsonMetaDataDecoder
            .decode(r#"{"adapterVersion":2,"values":{"scan.id":"42"}}"#)
            .unwrap();
        assert_eq!(metadata.adapter_version(), 2);
        assert!(metadata.has_value("scan.id", "42"));
        assert!(!metadata.has_value("scan.id", "43"));
        assert!(!metadata.has_value("other", "42"));
    }

    #[test]
    fn decode_malformed_is_none() {
        assert!(JsonMetaDataDecoder.decode("not json").is_none());
        assert!(JsonMetaDataDecoder.decode("null").is_none());
        assert!(JsonMetaDataDecoder.decode(r#"{"values":{"k":1}}"#).is_none());
    }

    #[test]
    fn decode_missing_fields_defaults() {
        let metadata = JsonMetaDataDecoder.decode("{}").unwrap();
        assert_eq!(metadata, MetaData::new());
    }

    #[test]
    fn to_json_decodes_back() {
        let metadata = MetaData::new().with_adapter_version(1).with_value("k", "v");
        let json = metadata.to_json().unwrap();
        assert_eq!(JsonMetaDataDecoder.decode(&json), Some(metadata));
    }
}
