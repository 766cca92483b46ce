//! Precondition and timed-progression tasks shared by several pipelines.

use crate::case::domain::{CaseRecord, WorkflowState};
use crate::pipeline::{CaseTask, TaskContext, TaskError, TaskResult};
use chrono::NaiveDate;

/// Rejects the event unless the case is in one of the allowed states.
#[derive(Debug, Clone, Copy)]
pub struct RequireState {
    allowed: &'static [WorkflowState],
}

impl RequireState {
    /// Creates the guard.
    #[must_use]
    pub const fn any_of(allowed: &'static [WorkflowState]) -> Self {
        Self { allowed }
    }
}

impl CaseTask for RequireState {
    fn name(&self) -> &'static str {
        "require-state"
    }

    fn run(&self, record: CaseRecord, _ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        if self.allowed.contains(&record.state) {
            return Ok(record);
        }
        let allowed: Vec<&str> = self.allowed.iter().map(|state| state.as_str()).collect();
        Err(TaskError::validation(format!(
            "Case is in state {} but this event requires one of: {}",
            record.state,
            allowed.join(", ")
        )))
    }
}

/// Rejects the event for joint applications.
#[derive(Debug, Clone, Copy)]
pub struct RequireSoleApplication {
    message: &'static str,
}

impl RequireSoleApplication {
    /// Creates the guard with the validation message to report.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl CaseTask for RequireSoleApplication {
    fn name(&self) -> &'static str {
        "require-sole-application"
    }

    fn run(&self, record: CaseRecord, _ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        if record.data.is_sole() {
            Ok(record)
        } else {
            Err(TaskError::validation(self.message))
        }
    }
}

/// Decision for a time-driven move; `None` while the case is not yet due.
pub type ProgressionDecision = fn(&CaseRecord, NaiveDate) -> Option<WorkflowState>;

/// Moves the case when a time-driven decision says it is due.
#[derive(Clone, Copy)]
pub struct TimedProgression {
    name: &'static str,
    decide: ProgressionDecision,
    not_due: &'static str,
    clears_due_date: bool,
}

impl TimedProgression {
    /// Creates a progression reporting `not_due` when the case cannot move
    /// yet.
    #[must_use]
    pub const fn new(name: &'static str, decide: ProgressionDecision, not_due: &'static str) -> Self {
        Self {
            name,
            decide,
            not_due,
            clears_due_date: false,
        }
    }

    /// Clears the due date once the case moves.
    #[must_use]
    pub const fn clearing_due_date(mut self) -> Self {
        self.clears_due_date = true;
        self
    }
}

impl CaseTask for TimedProgression {
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        let target =
            (self.decide)(&record, ctx.today()).ok_or_else(|| TaskError::validation(self.not_due))?;
        record.state = target;
        if self.clears_due_date {
            record.data.due_date = None;
        }
        Ok(record)
    }
}
