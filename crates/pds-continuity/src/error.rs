//! Error types for result continuity

use uuid::Uuid;

/// Failure reported by a [`crate::ResultSink`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SinkError(pub String);

impl SinkError {
    /// Create from message
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Persisting a result failed
#[derive(Debug, thiserror::Error)]
#[error("failed to persist result {result_id}: {source}")]
pub struct PersistError {
    /// Result that could not be stored
    pub result_id: Uuid,
    /// Underlying sink failure
    #[source]
    pub source: SinkError,
}
