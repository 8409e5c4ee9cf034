//! Result continuity manager
//!
//! [`ResultContinuity`] owns the former results of one executor run and the
//! current-result slot. It never changes the history.

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::error::PersistError;
use crate::metadata::{JsonMetaDataDecoder, MetaData, MetaDataDecoder};
use crate::result::{ResultHistory, ResultSink, ScanResult};
use crate::state::ContinuityState;

/// Baseline selection for one executor invocation
///
/// Construction selects the first former result as current. Later calls to
/// [`select_by_metadata`](Self::select_by_metadata) replace or clear it.
pub struct ResultContinuity {
    former_results: Vec<ScanResult>,
    state: ContinuityState,
    decoder: Arc<dyn MetaDataDecoder>,
    sink: Arc<dyn ResultSink>,
}

impl fmt::Debug for ResultContinuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultContinuity")
            .field("former_results", &self.former_results.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ResultContinuity {
    /// Create with former results, selecting the first one as current
    #[must_use]
    pub fn new(former_results: Vec<ScanResult>, sink: Arc<dyn ResultSink>) -> Self {
        let state = ContinuityState::first_of(&former_results);
        Self {
            former_results,
            state,
            decoder: Arc::new(JsonMetaDataDecoder),
            sink,
        }
    }

    /// Create from a history provider
    #[must_use]
    pub fn from_history(history: &dyn ResultHistory, sink: Arc<dyn ResultSink>) -> Self {
        Self::new(history.former_results(), sink)
    }

    /// Use a different metadata decoder for later selections
    #[inline]
    #[must_use]
    pub fn with_decoder(mut self, decoder: Arc<dyn MetaDataDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// Former results in their given order
    #[inline]
    #[must_use]
    pub fn former_results(&self) -> &[ScanResult] {
        &self.former_results
    }

    /// Select the first former result whose metadata holds `key = value`
    ///
    /// Clears the current result when nothing matches, so a stale selection
    /// never survives.
    pub fn select_by_metadata(&mut self, key: &str, value: &str) -> Option<&ScanResult> {
        tracing::debug!("Use first former result with key: {}, value: {}", key, value);

        self.state = ContinuityState::first_matching(
            &self.former_results,
            self.decoder.as_ref(),
            key,
            value,
        );
        if !self.state.has_current() {
            tracing::debug!("No former result has {}={}, current result cleared", key, value);
        }
        self.state.current()
    }

    /// Select by any displayable value (e.g. a target URI)
    pub fn select_by_metadata_display(
        &mut self,
        key: &str,
        value: &impl Display,
    ) -> Option<&ScanResult> {
        self.select_by_metadata(key, &value.to_string())
    }

    /// Current result, if any
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&ScanResult> {
        self.state.current()
    }

    /// Current state of the slot
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ContinuityState {
        &self.state
    }

    /// Decoded metadata of the current result
    #[must_use]
    pub fn current_metadata(&self) -> Option<MetaData> {
        self.current()
            .and_then(ScanResult::metadata)
            .and_then(|raw| self.decoder.decode(raw))
    }

    /// Hand a result to the sink
    ///
    /// # Errors
    /// Returns [`PersistError`] if the sink fails
    pub fn persist(&self, result: &ScanResult) -> Result<(), PersistError> {
        self.sink.save(result).map_err(|source| PersistError {
            result_id: result.id(),
            source,
        })
    }
}
