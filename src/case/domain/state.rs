//! Workflow states a case moves through.

use super::ParseWorkflowStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named legal milestone a case currently sits at.
///
/// Transitions between states are directed and mostly one way. The single
/// deferred-return edge is [`WorkflowState::WelshTranslationReview`], whose
/// exit state is stored on the case data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkflowState {
    /// Application is being drafted.
    Draft,
    /// Joint application waiting for applicant 2 to respond to the invite.
    AwaitingApplicant2Response,
    /// Applicant 2 has approved the joint application.
    Applicant2Approved,
    /// Application submitted, awaiting payment.
    AwaitingPayment,
    /// Application paid and submitted, awaiting issue.
    Submitted,
    /// Submitted, but supporting documents are outstanding.
    AwaitingDocuments,
    /// Issued sole application waiting for the respondent to acknowledge service.
    AwaitingAos,
    /// Respondent has drafted but not submitted the acknowledgement.
    AosDrafted,
    /// Acknowledgement of service deadline has passed.
    AosOverdue,
    /// Solicitor is arranging service on the respondent.
    AwaitingService,
    /// Mandatory holding period before a conditional order may be sought.
    Holding,
    /// Respondent intends to dispute the application.
    PendingDispute,
    /// Respondent disputes jurisdiction.
    Disputed,
    /// Holding period complete; conditional order may be applied for.
    AwaitingConditionalOrder,
    /// One joint applicant has applied for a conditional order.
    ConditionalOrderPending,
    /// Conditional order application waiting for legal advisor review.
    AwaitingLegalAdvisorReferral,
    /// Conditional order approved and listed for pronouncement.
    AwaitingPronouncement,
    /// Conditional order pronounced.
    ConditionalOrderPronounced,
    /// Final order may be applied for.
    AwaitingFinalOrder,
    /// One joint applicant has applied for the final order.
    AwaitingJointFinalOrder,
    /// Final order was not applied for within the permitted period.
    FinalOrderOverdue,
    /// Final order requested and waiting to be granted.
    FinalOrderRequested,
    /// Final order granted; the marriage or civil partnership is ended.
    FinalOrderComplete,
    /// Submitted Welsh content is being translated before the case moves on.
    WelshTranslationReview,
    /// Application withdrawn.
    Withdrawn,
}

impl WorkflowState {
    /// Every workflow state, in lifecycle order.
    pub const ALL: [Self; 25] = [
        Self::Draft,
        Self::AwaitingApplicant2Response,
        Self::Applicant2Approved,
        Self::AwaitingPayment,
        Self::Submitted,
        Self::AwaitingDocuments,
        Self::AwaitingAos,
        Self::AosDrafted,
        Self::AosOverdue,
        Self::AwaitingService,
        Self::Holding,
        Self::PendingDispute,
        Self::Disputed,
        Self::AwaitingConditionalOrder,
        Self::ConditionalOrderPending,
        Self::AwaitingLegalAdvisorReferral,
        Self::AwaitingPronouncement,
        Self::ConditionalOrderPronounced,
        Self::AwaitingFinalOrder,
        Self::AwaitingJointFinalOrder,
        Self::FinalOrderOverdue,
        Self::FinalOrderRequested,
        Self::FinalOrderComplete,
        Self::WelshTranslationReview,
        Self::Withdrawn,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::AwaitingApplicant2Response => "AwaitingApplicant2Response",
            Self::Applicant2Approved => "Applicant2Approved",
            Self::AwaitingPayment => "AwaitingPayment",
            Self::Submitted => "Submitted",
            Self::AwaitingDocuments => "AwaitingDocuments",
            Self::AwaitingAos => "AwaitingAos",
            Self::AosDrafted => "AosDrafted",
            Self::AosOverdue => "AosOverdue",
            Self::AwaitingService => "AwaitingService",
            Self::Holding => "Holding",
            Self::PendingDispute => "PendingDispute",
            Self::Disputed => "Disputed",
            Self::AwaitingConditionalOrder => "AwaitingConditionalOrder",
            Self::ConditionalOrderPending => "ConditionalOrderPending",
            Self::AwaitingLegalAdvisorReferral => "AwaitingLegalAdvisorReferral",
            Self::AwaitingPronouncement => "AwaitingPronouncement",
            Self::ConditionalOrderPronounced => "ConditionalOrderPronounced",
            Self::AwaitingFinalOrder => "AwaitingFinalOrder",
            Self::AwaitingJointFinalOrder => "AwaitingJointFinalOrder",
            Self::FinalOrderOverdue => "FinalOrderOverdue",
            Self::FinalOrderRequested => "FinalOrderRequested",
            Self::FinalOrderComplete => "FinalOrderComplete",
            Self::WelshTranslationReview => "WelshTranslationReview",
            Self::Withdrawn => "Withdrawn",
        }
    }

    /// Returns `true` while the application has not yet been issued.
    #[must_use]
    pub const fn is_pre_issue(self) -> bool {
        matches!(
            self,
            Self::Draft
                | Self::AwaitingApplicant2Response
                | Self::Applicant2Approved
                | Self::AwaitingPayment
                | Self::Submitted
                | Self::AwaitingDocuments
        )
    }

    /// Returns `true` for the states from which a final order may be
    /// applied for.
    #[must_use]
    pub const fn accepts_final_order_application(self) -> bool {
        matches!(
            self,
            Self::AwaitingFinalOrder | Self::AwaitingJointFinalOrder | Self::FinalOrderOverdue
        )
    }

    /// Returns `true` when no further progression is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::FinalOrderComplete | Self::Withdrawn)
    }
}

impl TryFrom<&str> for WorkflowState {
    type Error = ParseWorkflowStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == trimmed)
            .ok_or_else(|| ParseWorkflowStateError(value.to_owned()))
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
