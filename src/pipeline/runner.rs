//! Ordered execution of tasks for one triggering event.

use super::{CaseTask, PipelineFailure, TaskContext};
use crate::case::domain::CaseRecord;
use std::fmt;

/// Result of running a pipeline.
pub type PipelineResult = Result<CaseRecord, PipelineFailure>;

/// An ordered list of tasks run left to right over one case record.
///
/// The first failing task stops the run: later tasks are never invoked and
/// the failure carries the record exactly as the failing task received it.
/// The pipeline itself performs no I/O and never retries.
pub struct Pipeline {
    name: &'static str,
    tasks: Vec<Box<dyn CaseTask>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: Vec::new(),
        }
    }

    /// Appends a task.
    #[must_use]
    pub fn then(mut self, task: impl CaseTask + 'static) -> Self {
        self.tasks.push(Box::new(task));
        self
    }

    /// Returns the pipeline name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the task names in execution order.
    #[must_use]
    pub fn task_names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|task| task.name()).collect()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the pipeline has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Runs every task in order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineFailure`] for the first task that fails.
    pub fn run(&self, record: CaseRecord, ctx: &TaskContext<'_>) -> PipelineResult {
        let case_ref = record
            .id()
            .map_or_else(|| "draft".to_owned(), |id| id.to_string());
        let span = tracing::info_span!("pipeline", pipeline = self.name, case_id = %case_ref);
        let _entered = span.enter();

        let initial_state = record.state;
        let mut current = record;
        for task in &self.tasks {
            let checkpoint = current.clone();
            tracing::debug!(task = task.name(), state = %current.state, "running task");
            match task.run(current, ctx) {
                Ok(updated) => current = updated,
                Err(error) => {
                    tracing::warn!(task = task.name(), %error, "task failed; pipeline halted");
                    return Err(PipelineFailure::new(
                        self.name,
                        task.name(),
                        checkpoint,
                        error,
                    ));
                }
            }
        }

        if current.state != initial_state {
            tracing::info!(from = %initial_state, to = %current.state, "case state changed");
        }
        tracing::debug!(tasks = self.tasks.len(), "pipeline completed");
        Ok(current)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("tasks", &self.task_names())
            .finish()
    }
}
