//! Pipeline composition and collaborator failure paths.

use std::sync::Arc;

use super::harness::Harness;
use crate::case::domain::{ApplicantRole, CaseRecord, DocumentId, WorkflowState};
use crate::document::ports::RenderError;
use crate::document::ports::letters::MockLetterDispatcher;
use crate::document::ports::renderer::MockDocumentRenderer;
use crate::notification::ports::dispatcher::MockNotificationDispatcher;
use crate::pipeline::{CollaboratorError, TaskContext, TaskError};
use crate::test_support::{case_id, clock_at, config, instant, record, sole_data};
use crate::workflow::{CaseEvent, CasePipelines};
use rstest::rstest;

fn every_event() -> Vec<CaseEvent> {
    let by = ApplicantRole::Applicant1;
    vec![
        CaseEvent::IssueApplication,
        CaseEvent::ReissueApplication,
        CaseEvent::SubmitAos,
        CaseEvent::ConfirmSolicitorService,
        CaseEvent::ProgressAosOverdue,
        CaseEvent::ProgressHeldCase,
        CaseEvent::SubmitConditionalOrder { by },
        CaseEvent::PronounceConditionalOrder,
        CaseEvent::ProgressToAwaitingFinalOrder,
        CaseEvent::ApplyForFinalOrder { by },
        CaseEvent::RemindPartnerToApplyForFinalOrder,
        CaseEvent::DeclareIntentionToSwitchToSole { by },
        CaseEvent::SwitchToSoleFinalOrder { by },
        CaseEvent::ProgressFinalOrderOverdue,
        CaseEvent::GrantFinalOrder,
        CaseEvent::CompleteWelshTranslationReview,
    ]
}

#[rstest]
fn every_event_has_a_named_pipeline() {
    let harness = Harness::with_case(record(WorkflowState::Submitted, sole_data()));
    let pipelines = harness.pipelines();

    for event in every_event() {
        let pipeline = pipelines.pipeline_for(event);
        assert_eq!(pipeline.name(), event.name());
        assert!(!pipeline.is_empty(), "{event} has no tasks");
    }
}

#[rstest]
fn issue_pipeline_runs_tasks_in_order() {
    let harness = Harness::with_case(record(WorkflowState::Submitted, sole_data()));

    let pipeline = harness.pipelines().pipeline_for(CaseEvent::IssueApplication);

    assert_eq!(
        pipeline.task_names(),
        vec![
            "require-case-id",
            "require-state",
            "validate-application-for-issue",
            "issue-application",
            "generate-access-code",
            "generate-notice-of-proceedings",
            "send-notifications",
        ]
    );
}

#[rstest]
fn reissue_rejects_a_draft_before_touching_it() {
    let harness = Harness::with_case(record(WorkflowState::Submitted, sole_data()));
    let pipeline = harness.pipelines().pipeline_for(CaseEvent::ReissueApplication);
    let draft = CaseRecord::draft(sole_data(), &clock_at(2023, 12, 20));
    let settings = config();
    let ctx = TaskContext::new(instant(2024, 3, 10), &settings);

    let failure = pipeline
        .run(draft.clone(), &ctx)
        .expect_err("drafts cannot be reissued");

    assert_eq!(pipeline.task_names().first(), Some(&"require-case-id"));
    assert_eq!(failure.task(), "require-case-id");
    assert!(matches!(failure.error(), TaskError::DataInconsistency(_)));
    assert_eq!(failure.record(), &draft);
}

#[rstest]
fn issuing_twice_at_the_same_instant_is_identical() -> eyre::Result<()> {
    let input = record(WorkflowState::Submitted, sole_data());
    let first_run = Harness::with_case(input.clone());
    let second_run = Harness::with_case(input);

    let first = first_run
        .service_at(clock_at(2024, 1, 1))
        .handle(case_id(), CaseEvent::IssueApplication)?;
    let second = second_run
        .service_at(clock_at(2024, 1, 1))
        .handle(case_id(), CaseEvent::IssueApplication)?;

    assert!(first.data.case_invite.access_code.is_some());
    assert_eq!(
        first.data.case_invite.access_code,
        second.data.case_invite.access_code
    );
    let document_ids = |updated: &CaseRecord| -> Vec<DocumentId> {
        updated.data.documents.iter().map(|document| document.id).collect()
    };
    assert_eq!(document_ids(&first).len(), 2);
    assert_eq!(document_ids(&first), document_ids(&second));
    assert_eq!(first, second);
    assert_eq!(first_run.templates_sent(), second_run.templates_sent());
    Ok(())
}

#[rstest]
fn same_input_produces_same_record() -> eyre::Result<()> {
    let input = record(WorkflowState::Submitted, sole_data());
    let settings = config();
    let ctx = TaskContext::new(instant(2024, 1, 1), &settings);

    let first = Harness::with_case(input.clone())
        .pipelines()
        .pipeline_for(CaseEvent::IssueApplication)
        .run(input.clone(), &ctx)?;
    let second = Harness::with_case(input.clone())
        .pipelines()
        .pipeline_for(CaseEvent::IssueApplication)
        .run(input, &ctx)?;

    assert_eq!(first, second);
    Ok(())
}

#[rstest]
fn renderer_failure_stops_before_notifications() {
    let mut renderer = MockDocumentRenderer::new();
    renderer
        .expect_render()
        .times(1)
        .returning(|_, _| Err(RenderError::storage(std::io::Error::other("disk full"))));
    let mut letters = MockLetterDispatcher::new();
    letters.expect_send_letters().never();
    let mut notifications = MockNotificationDispatcher::new();
    notifications.expect_send_email().never();
    let pipelines = CasePipelines::new(Arc::new(renderer), Arc::new(letters), Arc::new(notifications));
    let input = record(WorkflowState::Submitted, sole_data());
    let settings = config();
    let ctx = TaskContext::new(instant(2024, 1, 1), &settings);

    let failure = pipelines
        .pipeline_for(CaseEvent::IssueApplication)
        .run(input, &ctx)
        .expect_err("renderer failure stops the run");

    assert_eq!(failure.task(), "generate-notice-of-proceedings");
    assert!(matches!(
        failure.error(),
        TaskError::Collaborator(CollaboratorError::Renderer(RenderError::Storage(_)))
    ));
    assert_eq!(failure.record().state, WorkflowState::AwaitingAos);
    assert!(failure.record().data.documents.is_empty());
}
