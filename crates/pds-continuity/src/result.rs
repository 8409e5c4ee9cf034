//! Scan results and the collaborators providing and storing them

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SinkError;

/// One outcome of running an executor for a target
///
/// Immutable once created. The metadata string is opaque here and only read
/// through a [`crate::MetaDataDecoder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<String>,
    findings_ref: String,
}

impl ScanResult {
    /// Create result with a fresh identifier
    #[inline]
    #[must_use]
    pub fn new(findings_ref: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            metadata: None,
            findings_ref: findings_ref.into(),
        }
    }

    /// With explicit identifier
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// With raw metadata string
    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Result identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Raw metadata, if any
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Reference to the stored findings
    #[inline]
    #[must_use]
    pub fn findings_ref(&self) -> &str {
        &self.findings_ref
    }
}

/// Source of former results for the current target
pub trait ResultHistory: Send + Sync {
    /// Former results in significance order (most relevant first)
    fn former_results(&self) -> Vec<ScanResult>;
}

impl ResultHistory for Vec<ScanResult> {
    fn former_results(&self) -> Vec<ScanResult> {
        self.clone()
    }
}

/// Persistence collaborator for results
pub trait ResultSink: Send + Sync {
    /// Store a result
    ///
    /// # Errors
    /// Returns [`SinkError`] when the result could not be stored
    fn save(&self, result: &ScanResult) -> Result<(), SinkError>;
}
