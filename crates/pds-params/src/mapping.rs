//! Mapping documents
//!
//! A mapping is a named JSON fragment kept in an external store. The
//! resolver forwards the raw JSON; [`MappingData`] is the typed view for
//! callers that need the entries.

use serde::{Deserialize, Serialize};

/// Placeholder sent when a referenced mapping does not exist
pub const EMPTY_MAPPING_JSON: &str = "{}";

/// Errors reading mapping JSON
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// Body is not valid mapping JSON
    #[error("invalid mapping json for '{id}': {source}")]
    InvalidJson {
        /// Mapping identifier
        id: String,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Mapping data could not be serialized
    #[error("mapping serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// External repository of mapping documents
pub trait MappingStore: Send + Sync {
    /// Fetch a mapping by identifier
    fn find_mapping_by_id(&self, id: &str) -> Option<MappingDocument>;
}

/// Named mapping with its JSON body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDocument {
    id: String,
    data: String,
}

impl MappingDocument {
    /// Create from identifier and raw JSON
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Create from typed mapping data
    ///
    /// # Errors
    /// Returns error if the data cannot be serialized
    pub fn from_mapping_data(id: impl Into<String>, data: &MappingData) -> Result<Self, MappingError> {
        Ok(Self::new(id, data.to_json()?))
    }

    /// Mapping identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw JSON body
    #[inline]
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Parse body as [`MappingData`]
    ///
    /// # Errors
    /// Returns [`MappingError::InvalidJson`] if the body is malformed
    pub fn mapping_data(&self) -> Result<MappingData, MappingError> {
        serde_json::from_str(&self.data).map_err(|source| MappingError::InvalidJson {
            id: self.id.clone(),
            source,
        })
    }
}

/// Typed mapping content
///
/// Unknown JSON properties are ignored so older readers keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingData {
    /// Mapping entries in declaration order
    #[serde(default)]
    pub entries: Vec<MappingEntry>,
}

impl MappingData {
    /// Create empty mapping data
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entry
    #[inline]
    #[must_use]
    pub fn with_entry(mut self, entry: MappingEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Serialize to JSON
    ///
    /// # Errors
    /// Returns error if serialization fails (rare for JSON)
    pub fn to_json(&self) -> Result<String, MappingError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Single pattern to replacement rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Pattern to match
    #[serde(default)]
    pub pattern: String,
    /// Replacement value
    #[serde(default)]
    pub replacement: String,
    /// Free text comment
    #[serde(default)]
    pub comment: String,
}

impl MappingEntry {
    /// Create entry without comment
    #[inline]
    #[must_use]
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            comment: String::new(),
        }
    }

    /// Attach comment
    #[inline]
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
