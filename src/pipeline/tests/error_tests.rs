//! Unit tests for task and pipeline errors.

use crate::case::domain::WorkflowState;
use crate::document::ports::LetterDispatchError;
use crate::pipeline::{CollaboratorError, PipelineFailure, TaskError, ValidationErrors};
use crate::progression::DueDateError;
use crate::test_support::{record, sole_data};
use rstest::rstest;

#[rstest]
fn no_messages_means_valid() {
    assert!(ValidationErrors::from_messages(Vec::new()).is_none());
    assert!(ValidationErrors::check(Vec::new()).is_ok());
}

#[rstest]
fn every_message_is_kept_in_order() {
    let errors = ValidationErrors::check(vec!["first".to_owned(), "second".to_owned()])
        .expect_err("messages present");

    assert_eq!(errors.messages(), ["first", "second"]);
    assert_eq!(errors.to_string(), "first; second");
}

#[rstest]
fn due_date_errors_are_data_inconsistencies() {
    let error = TaskError::from(DueDateError::MissingIssueDate);

    assert!(matches!(error, TaskError::DataInconsistency(_)));
    assert!(error.validation_messages().is_none());
}

#[rstest]
fn collaborator_errors_stay_distinct() {
    let error = TaskError::from(LetterDispatchError::transport(std::io::Error::other("offline")));

    assert!(matches!(
        error,
        TaskError::Collaborator(CollaboratorError::Letters(LetterDispatchError::Transport(_)))
    ));
}

#[rstest]
fn failure_returns_untouched_record() {
    let input = record(WorkflowState::Submitted, sole_data());
    let failure = PipelineFailure::new(
        "issue-application",
        "validate-application-for-issue",
        input.clone(),
        TaskError::validation("Marriage date cannot be empty"),
    );

    assert_eq!(
        failure.to_string(),
        "pipeline 'issue-application' stopped at task 'validate-application-for-issue': \
         validation failed: Marriage date cannot be empty"
    );
    let (record_back, error) = failure.into_parts();
    assert_eq!(record_back, input);
    assert!(matches!(error, TaskError::Validation(_)));
}
