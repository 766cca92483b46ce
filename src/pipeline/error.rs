//! Error taxonomy for tasks and pipelines.
//!
//! A task fails in one of three ways: the case does not satisfy a
//! precondition for the requested step ([`TaskError::Validation`]), the case
//! is in a shape the step cannot legally process
//! ([`TaskError::DataInconsistency`]), or an external collaborator failed
//! ([`TaskError::Collaborator`]).

use crate::case::{domain::CaseRecord, ports::CaseStoreError};
use crate::document::ports::{LetterDispatchError, RenderError};
use crate::notification::ports::NotificationDispatchError;
use thiserror::Error;

/// Ordered, non-empty list of human-readable validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join("; "))]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    /// Creates a list holding one message.
    #[must_use]
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    /// Wraps collected messages, returning `None` when there are none.
    #[must_use]
    pub fn from_messages(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self(messages))
        }
    }

    /// Converts collected messages into a result: `Ok` when empty.
    ///
    /// # Errors
    ///
    /// Returns the messages as [`ValidationErrors`] when any were collected.
    pub fn check(messages: Vec<String>) -> Result<(), Self> {
        Self::from_messages(messages).map_or(Ok(()), Err)
    }

    /// Returns the messages in the order they were raised.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list, returning the messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

/// Failure of an external dependency, kept distinct so callers can choose a
/// retry policy.
#[derive(Debug, Clone, Error)]
pub enum CollaboratorError {
    /// Document rendering failed.
    #[error(transparent)]
    Renderer(#[from] RenderError),
    /// Letter printing failed.
    #[error(transparent)]
    Letters(#[from] LetterDispatchError),
    /// Email dispatch failed.
    #[error(transparent)]
    Notifications(#[from] NotificationDispatchError),
    /// Case storage failed.
    #[error(transparent)]
    Store(#[from] CaseStoreError),
}

/// Reason a task did not produce an updated case.
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    /// The case fails a precondition of the step.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The case is in a shape the step cannot process.
    #[error("case data inconsistency: {0}")]
    DataInconsistency(String),
    /// An external collaborator failed.
    #[error("collaborator failure: {0}")]
    Collaborator(#[from] CollaboratorError),
}

impl TaskError {
    /// Creates a validation failure with a single message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(ValidationErrors::single(message))
    }

    /// Creates a data inconsistency failure.
    #[must_use]
    pub fn inconsistency(message: impl Into<String>) -> Self {
        Self::DataInconsistency(message.into())
    }

    /// Returns the validation messages when this is a validation failure.
    #[must_use]
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation(errors) => Some(errors.messages()),
            Self::DataInconsistency(_) | Self::Collaborator(_) => None,
        }
    }
}

impl From<RenderError> for TaskError {
    fn from(err: RenderError) -> Self {
        Self::Collaborator(err.into())
    }
}

impl From<LetterDispatchError> for TaskError {
    fn from(err: LetterDispatchError) -> Self {
        Self::Collaborator(err.into())
    }
}

impl From<NotificationDispatchError> for TaskError {
    fn from(err: NotificationDispatchError) -> Self {
        Self::Collaborator(err.into())
    }
}

/// Result type for a single task.
pub type TaskResult<T> = Result<T, TaskError>;

/// A pipeline run that stopped at a failing task.
///
/// Carries the record exactly as it was handed to the failing task, so no
/// part of the failing step is ever applied.
#[derive(Debug, Clone, Error)]
#[error("pipeline '{pipeline}' stopped at task '{task}': {error}")]
pub struct PipelineFailure {
    pipeline: &'static str,
    task: &'static str,
    record: Box<CaseRecord>,
    #[source]
    error: TaskError,
}

impl PipelineFailure {
    /// Creates a failure report.
    #[must_use]
    pub fn new(
        pipeline: &'static str,
        task: &'static str,
        record: CaseRecord,
        error: TaskError,
    ) -> Self {
        Self {
            pipeline,
            task,
            record: Box::new(record),
            error,
        }
    }

    /// Returns the name of the pipeline that stopped.
    #[must_use]
    pub const fn pipeline(&self) -> &'static str {
        self.pipeline
    }

    /// Returns the name of the failing task.
    #[must_use]
    pub const fn task(&self) -> &'static str {
        self.task
    }

    /// Returns the record as it was before the failing task ran.
    #[must_use]
    pub fn record(&self) -> &CaseRecord {
        &self.record
    }

    /// Returns the task failure.
    #[must_use]
    pub const fn error(&self) -> &TaskError {
        &self.error
    }

    /// Consumes the failure, returning the untouched record and the error.
    #[must_use]
    pub fn into_parts(self) -> (CaseRecord, TaskError) {
        (*self.record, self.error)
    }
}
