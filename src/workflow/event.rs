//! Events that advance a case.

use crate::case::domain::ApplicantRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A triggering event. Each event selects exactly one pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CaseEvent {
    /// The court issues the application.
    IssueApplication,
    /// The court reissues an application that was not served.
    ReissueApplication,
    /// The respondent submits the acknowledgement of service.
    SubmitAos,
    /// Applicant 1's solicitor confirms the papers were served.
    ConfirmSolicitorService,
    /// The respondent missed the acknowledgement deadline.
    ProgressAosOverdue,
    /// The holding period ended.
    ProgressHeldCase,
    /// An applicant applies for the conditional order.
    SubmitConditionalOrder {
        /// Applying party.
        by: ApplicantRole,
    },
    /// The court pronounces the conditional order.
    PronounceConditionalOrder,
    /// The final order may now be applied for.
    ProgressToAwaitingFinalOrder,
    /// An applicant applies for the final order.
    ApplyForFinalOrder {
        /// Applying party.
        by: ApplicantRole,
    },
    /// Remind the joint applicant who has not applied for the final order.
    RemindPartnerToApplyForFinalOrder,
    /// A joint applicant states they intend to proceed alone.
    DeclareIntentionToSwitchToSole {
        /// Declaring party.
        by: ApplicantRole,
    },
    /// A joint applicant proceeds with the final order alone.
    SwitchToSoleFinalOrder {
        /// Proceeding party.
        by: ApplicantRole,
    },
    /// Nobody applied for the final order within the eligibility window.
    ProgressFinalOrderOverdue,
    /// The court grants the final order.
    GrantFinalOrder,
    /// Welsh translation of submitted answers is complete.
    CompleteWelshTranslationReview,
}

impl CaseEvent {
    /// Returns the pipeline name for this event.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IssueApplication => "issue-application",
            Self::ReissueApplication => "reissue-application",
            Self::SubmitAos => "submit-aos",
            Self::ConfirmSolicitorService => "confirm-solicitor-service",
            Self::ProgressAosOverdue => "progress-aos-overdue",
            Self::ProgressHeldCase => "progress-held-case",
            Self::SubmitConditionalOrder { .. } => "submit-conditional-order",
            Self::PronounceConditionalOrder => "pronounce-conditional-order",
            Self::ProgressToAwaitingFinalOrder => "progress-to-awaiting-final-order",
            Self::ApplyForFinalOrder { .. } => "apply-for-final-order",
            Self::RemindPartnerToApplyForFinalOrder => "remind-partner-to-apply-for-final-order",
            Self::DeclareIntentionToSwitchToSole { .. } => "declare-intention-to-switch-to-sole",
            Self::SwitchToSoleFinalOrder { .. } => "switch-to-sole-final-order",
            Self::ProgressFinalOrderOverdue => "progress-final-order-overdue",
            Self::GrantFinalOrder => "grant-final-order",
            Self::CompleteWelshTranslationReview => "complete-welsh-translation-review",
        }
    }
}

impl fmt::Display for CaseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
