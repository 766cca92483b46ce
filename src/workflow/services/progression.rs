//! Service layer that loads a case, runs the event pipeline and saves the
//! result.

use crate::case::{
    domain::{CaseData, CaseId, CaseRecord},
    ports::{CaseStore, CaseStoreError},
};
use crate::config::CaseConfig;
use crate::pipeline::{PipelineFailure, TaskContext};
use crate::workflow::{CaseEvent, CasePipelines};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for case progression.
#[derive(Debug, Clone, Error)]
pub enum CaseProgressionError {
    /// Loading or saving the case failed.
    #[error(transparent)]
    Store(#[from] CaseStoreError),
    /// A pipeline task failed; nothing was saved.
    #[error(transparent)]
    Pipeline(#[from] PipelineFailure),
}

/// Result type for case progression operations.
pub type CaseProgressionResult<T> = Result<T, CaseProgressionError>;

/// Case progression orchestration service.
///
/// Each call reads the clock once, so every task in the run sees the same
/// instant. The store is expected to serialise writers per case.
#[derive(Clone)]
pub struct CaseProgressionService<S, C>
where
    S: CaseStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    config: Arc<CaseConfig>,
    pipelines: CasePipelines,
}

impl<S, C> CaseProgressionService<S, C>
where
    S: CaseStore,
    C: Clock + Send + Sync,
{
    /// Creates a new case progression service.
    #[must_use]
    pub const fn new(
        store: Arc<S>,
        clock: Arc<C>,
        config: Arc<CaseConfig>,
        pipelines: CasePipelines,
    ) -> Self {
        Self {
            store,
            clock,
            config,
            pipelines,
        }
    }

    /// Returns the configuration pipelines run with.
    #[must_use]
    pub fn config(&self) -> &CaseConfig {
        &self.config
    }

    /// Applies `event` to the stored case and saves the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`CaseProgressionError::Store`] when the case cannot be
    /// loaded or saved and [`CaseProgressionError::Pipeline`] when a task
    /// fails. A failed pipeline leaves the stored case untouched.
    pub fn handle(&self, case_id: CaseId, event: CaseEvent) -> CaseProgressionResult<CaseRecord> {
        self.handle_with_answers(case_id, event, |_| {})
    }

    /// Records the caller's answers on the case, then applies `event`.
    ///
    /// The answers are saved only if the pipeline succeeds.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::handle`].
    pub fn handle_with_answers(
        &self,
        case_id: CaseId,
        event: CaseEvent,
        answers: impl FnOnce(&mut CaseData),
    ) -> CaseProgressionResult<CaseRecord> {
        let mut record = self.store.load(case_id)?;
        answers(&mut record.data);

        let ctx = TaskContext::from_clock(self.clock.as_ref(), &self.config);
        let updated = self.pipelines.pipeline_for(event).run(record, &ctx)?;
        self.store.save(&updated)?;
        tracing::info!(
            case_id = %case_id,
            %event,
            state = %updated.state,
            "case progressed"
        );
        Ok(updated)
    }
}
