//! The task contract and its execution context.

use super::TaskResult;
use crate::case::domain::{CaseId, CaseRecord};
use crate::config::CaseConfig;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

/// Inputs shared by every task in one pipeline run.
///
/// The current time is captured once when the run starts, so every task in
/// the run observes the same instant.
#[derive(Debug, Clone, Copy)]
pub struct TaskContext<'a> {
    now: DateTime<Utc>,
    config: &'a CaseConfig,
}

impl<'a> TaskContext<'a> {
    /// Creates a context for the given instant.
    #[must_use]
    pub const fn new(now: DateTime<Utc>, config: &'a CaseConfig) -> Self {
        Self { now, config }
    }

    /// Creates a context by reading the injected clock once.
    #[must_use]
    pub fn from_clock(clock: &impl Clock, config: &'a CaseConfig) -> Self {
        Self::new(clock.utc(), config)
    }

    /// Returns the instant the run started.
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Returns the calendar date the run started on.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Returns the progression configuration.
    #[must_use]
    pub const fn config(&self) -> &'a CaseConfig {
        self.config
    }
}

/// A single named unit of work over a case record.
///
/// Tasks receive the record by value and return the updated record, or an
/// error. Given the same record and context a task must produce the same
/// result; collaborators it calls are captured when the task is built.
pub trait CaseTask: Send + Sync {
    /// Returns the task name used in logs and failure reports.
    fn name(&self) -> &'static str;

    /// Runs the task.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskError`] when the step cannot be applied.
    fn run(&self, record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord>;
}

/// Task backed by a plain function or closure.
pub struct FnTask<F> {
    name: &'static str,
    step: F,
}

impl<F> CaseTask for FnTask<F>
where
    F: Fn(CaseRecord, &TaskContext<'_>) -> TaskResult<CaseRecord> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        (self.step)(record, ctx)
    }
}

/// Wraps a closure as a named task.
///
/// # Examples
///
/// ```
/// use decree::pipeline::{CaseTask, task_fn};
///
/// let noop = task_fn("noop", |record, _ctx| Ok(record));
/// assert_eq!(noop.name(), "noop");
/// ```
#[must_use]
pub const fn task_fn<F>(name: &'static str, step: F) -> FnTask<F>
where
    F: Fn(CaseRecord, &TaskContext<'_>) -> TaskResult<CaseRecord> + Send + Sync,
{
    FnTask { name, step }
}

/// Returns the case reference, or a data inconsistency for unsaved drafts.
///
/// # Errors
///
/// Returns [`super::TaskError::DataInconsistency`] when the record has no
/// reference.
pub fn require_case_id(record: &CaseRecord) -> TaskResult<CaseId> {
    record
        .id()
        .ok_or_else(|| super::TaskError::inconsistency("case has no reference"))
}
