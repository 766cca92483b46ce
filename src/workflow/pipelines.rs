//! Maps each case event to its pipeline.

use std::sync::Arc;

use super::CaseEvent;
use super::tasks::{
    ApplyForFinalOrder, CaseDocument, CompleteWelshTranslationReview, ConfirmSolicitorService,
    Correspondence, DeclareIntentionToSwitchToSole, GenerateAccessCode, GenerateDocument,
    GrantFinalOrder, IssueApplication, PronounceConditionalOrder, ReissueApplication,
    RequireSoleApplication, RequireState, SendNotifications, SubmitAos, SubmitConditionalOrder,
    SwitchToSoleFinalOrder, TimedProgression, ValidateAosSubmission,
    ValidateApplicationForIssue, ValidateSolicitorService,
};
use crate::document::ports::{DocumentRenderer, LetterDispatcher};
use crate::notification::domain::Milestone;
use crate::notification::ports::NotificationDispatcher;
use crate::case::domain::{CaseRecord, WorkflowState};
use crate::pipeline::{Pipeline, TaskContext, TaskResult, require_case_id, task_fn};
use crate::progression::transition::{
    state_after_aos_overdue, state_after_final_order_eligibility, state_after_final_order_overdue,
    state_after_holding_period,
};

const ISSUABLE: &[WorkflowState] = &[WorkflowState::Submitted, WorkflowState::AwaitingDocuments];

const AWAITING_SERVICE: &[WorkflowState] = &[
    WorkflowState::AwaitingAos,
    WorkflowState::AosOverdue,
    WorkflowState::AwaitingService,
];

const AWAITING_AOS: &[WorkflowState] = &[
    WorkflowState::AwaitingAos,
    WorkflowState::AosDrafted,
    WorkflowState::AosOverdue,
];

const AWAITING_SERVICE_CONFIRMATION: &[WorkflowState] =
    &[WorkflowState::AwaitingService, WorkflowState::AwaitingAos];

const AWAITING_CONDITIONAL_ORDER: &[WorkflowState] = &[
    WorkflowState::AwaitingConditionalOrder,
    WorkflowState::ConditionalOrderPending,
];

const AWAITING_PRONOUNCEMENT: &[WorkflowState] = &[
    WorkflowState::AwaitingLegalAdvisorReferral,
    WorkflowState::AwaitingPronouncement,
];

const ACCEPTS_FINAL_ORDER: &[WorkflowState] = &[
    WorkflowState::AwaitingFinalOrder,
    WorkflowState::AwaitingJointFinalOrder,
    WorkflowState::FinalOrderOverdue,
];

const AWAITING_JOINT_FINAL_ORDER: &[WorkflowState] = &[WorkflowState::AwaitingJointFinalOrder];

const FINAL_ORDER_REQUESTED: &[WorkflowState] = &[WorkflowState::FinalOrderRequested];

/// Builds the pipeline for each event from the injected collaborators.
#[derive(Clone)]
pub struct CasePipelines {
    correspondence: Correspondence,
}

impl CasePipelines {
    /// Creates the pipeline factory.
    #[must_use]
    pub const fn new(
        renderer: Arc<dyn DocumentRenderer>,
        letters: Arc<dyn LetterDispatcher>,
        notifications: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            correspondence: Correspondence {
                notifications,
                renderer,
                letters,
            },
        }
    }

    /// Returns the pipeline run for `event`.
    #[must_use]
    pub fn pipeline_for(&self, event: CaseEvent) -> Pipeline {
        let pipeline = Pipeline::new(event.name());
        match event {
            CaseEvent::IssueApplication => pipeline
                .then(task_fn("require-case-id", has_case_id))
                .then(RequireState::any_of(ISSUABLE))
                .then(ValidateApplicationForIssue)
                .then(IssueApplication)
                .then(GenerateAccessCode)
                .then(self.document(CaseDocument::NoticeOfProceedings))
                .then(self.notify(Milestone::ApplicationIssued)),
            CaseEvent::ReissueApplication => pipeline
                .then(task_fn("require-case-id", has_case_id))
                .then(RequireState::any_of(AWAITING_SERVICE))
                .then(ReissueApplication)
                .then(GenerateAccessCode)
                .then(self.document(CaseDocument::NoticeOfProceedings))
                .then(self.notify(Milestone::ApplicationIssued)),
            CaseEvent::SubmitAos => pipeline
                .then(RequireSoleApplication::new(
                    "Acknowledgement of service is only required for sole applications",
                ))
                .then(RequireState::any_of(AWAITING_AOS))
                .then(ValidateAosSubmission)
                .then(SubmitAos)
                .then(self.notify(Milestone::AosSubmitted)),
            CaseEvent::ConfirmSolicitorService => pipeline
                .then(RequireState::any_of(AWAITING_SERVICE_CONFIRMATION))
                .then(ValidateSolicitorService)
                .then(ConfirmSolicitorService),
            CaseEvent::ProgressAosOverdue => pipeline
                .then(TimedProgression::new(
                    "progress-aos-overdue",
                    state_after_aos_overdue,
                    "Acknowledgement of service is not overdue",
                ))
                .then(self.notify(Milestone::PartnerNotResponded)),
            CaseEvent::ProgressHeldCase => pipeline.then(
                TimedProgression::new(
                    "progress-held-case",
                    state_after_holding_period,
                    "Holding period has not ended",
                )
                .clearing_due_date(),
            ),
            CaseEvent::SubmitConditionalOrder { by } => pipeline
                .then(RequireState::any_of(AWAITING_CONDITIONAL_ORDER))
                .then(SubmitConditionalOrder::by(by)),
            CaseEvent::PronounceConditionalOrder => pipeline
                .then(RequireState::any_of(AWAITING_PRONOUNCEMENT))
                .then(PronounceConditionalOrder)
                .then(self.document(CaseDocument::ConditionalOrderCertificate))
                .then(self.notify(Milestone::ConditionalOrderPronounced)),
            CaseEvent::ProgressToAwaitingFinalOrder => pipeline
                .then(TimedProgression::new(
                    "progress-to-awaiting-final-order",
                    state_after_final_order_eligibility,
                    "Final order cannot be applied for yet",
                ))
                .then(self.notify(Milestone::FinalOrderCanBeApplied)),
            CaseEvent::ApplyForFinalOrder { by } => pipeline
                .then(RequireState::any_of(ACCEPTS_FINAL_ORDER))
                .then(ApplyForFinalOrder::by(by)),
            CaseEvent::RemindPartnerToApplyForFinalOrder => pipeline
                .then(RequireState::any_of(AWAITING_JOINT_FINAL_ORDER))
                .then(self.notify(Milestone::OtherPartyAppliedForFinalOrder)),
            CaseEvent::DeclareIntentionToSwitchToSole { by } => pipeline
                .then(RequireState::any_of(AWAITING_JOINT_FINAL_ORDER))
                .then(DeclareIntentionToSwitchToSole::by(by))
                .then(self.notify(Milestone::PartnerIntendsToSwitchToSole)),
            CaseEvent::SwitchToSoleFinalOrder { by } => pipeline
                .then(RequireState::any_of(AWAITING_JOINT_FINAL_ORDER))
                .then(SwitchToSoleFinalOrder::by(by)),
            CaseEvent::ProgressFinalOrderOverdue => pipeline
                .then(TimedProgression::new(
                    "progress-final-order-overdue",
                    state_after_final_order_overdue,
                    "Final order is not overdue",
                ))
                .then(self.notify(Milestone::FinalOrderOverdue)),
            CaseEvent::GrantFinalOrder => pipeline
                .then(RequireState::any_of(FINAL_ORDER_REQUESTED))
                .then(GrantFinalOrder)
                .then(self.document(CaseDocument::FinalOrderGrant))
                .then(self.notify(Milestone::FinalOrderGranted)),
            CaseEvent::CompleteWelshTranslationReview => pipeline
                .then(CompleteWelshTranslationReview)
                .then(self.notify(Milestone::WelshTranslationReviewComplete)),
        }
    }

    fn document(&self, document: CaseDocument) -> GenerateDocument {
        GenerateDocument::new(document, Arc::clone(&self.correspondence.renderer))
    }

    fn notify(&self, milestone: Milestone) -> SendNotifications {
        SendNotifications::new(milestone, self.correspondence.clone())
    }
}

fn has_case_id(record: CaseRecord, _ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
    require_case_id(&record)?;
    Ok(record)
}
