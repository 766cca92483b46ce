//! Task composition for case progression.
//!
//! A [`Pipeline`] threads a [`crate::case::domain::CaseRecord`] through an
//! ordered list of [`CaseTask`]s for one triggering event, stopping at the
//! first failure. Time and configuration reach tasks through a
//! [`TaskContext`]; collaborators are captured by the tasks themselves.

mod error;
mod runner;
mod task;

pub use error::{CollaboratorError, PipelineFailure, TaskError, TaskResult, ValidationErrors};
pub use runner::{Pipeline, PipelineResult};
pub use task::{CaseTask, FnTask, TaskContext, require_case_id, task_fn};

#[cfg(test)]
mod tests;
