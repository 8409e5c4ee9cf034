//! Per-run executor invocation
//!
//! Bundles the validated configuration facade with the result continuity of
//! one run. Created at the start of a run and dropped at its end.

use std::sync::Arc;

use pds_continuity::{ResultContinuity, ResultHistory, ResultSink, ScanResult};
use pds_params::ResolvedParameters;

use crate::error::ExecutorError;
use crate::support::ExecutorConfigSupport;

/// One executor run against a PDS
#[derive(Debug)]
pub struct ExecutorInvocation {
    support: Arc<ExecutorConfigSupport>,
    continuity: ResultContinuity,
}

impl ExecutorInvocation {
    /// Start an invocation; the first former result becomes current
    #[must_use]
    pub fn new(
        support: Arc<ExecutorConfigSupport>,
        history: &dyn ResultHistory,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        let continuity = ResultContinuity::from_history(history, sink);
        tracing::debug!(
            "Invocation of executor {} starts with {} former results",
            support.config().name,
            continuity.former_results().len()
        );
        Self {
            support,
            continuity,
        }
    }

    /// Configuration facade
    #[inline]
    #[must_use]
    pub fn support(&self) -> &ExecutorConfigSupport {
        &self.support
    }

    /// Result continuity
    #[inline]
    #[must_use]
    pub fn continuity(&self) -> &ResultContinuity {
        &self.continuity
    }

    /// Mutable result continuity
    #[inline]
    pub fn continuity_mut(&mut self) -> &mut ResultContinuity {
        &mut self.continuity
    }

    /// Parameters sent to the PDS for this run
    #[must_use]
    pub fn job_parameters(&self, project_id: &str) -> ResolvedParameters {
        self.support.create_job_parameters(project_id)
    }

    /// Continue from the former result whose metadata holds `key = value`
    pub fn continue_from(&mut self, key: &str, value: &str) -> Option<&ScanResult> {
        self.continuity.select_by_metadata(key, value)
    }

    /// Current baseline result
    #[inline]
    #[must_use]
    pub fn current_result(&self) -> Option<&ScanResult> {
        self.continuity.current()
    }

    /// Persist the outcome of this run
    ///
    /// # Errors
    /// Returns [`ExecutorError::Persist`] if the sink fails
    pub fn persist(&self, result: &ScanResult) -> Result<(), ExecutorError> {
        self.continuity.persist(result)?;
        tracing::info!(
            "Executor {} persisted result {}",
            self.support.config().name,
            result.id()
        );
        Ok(())
    }
}
