//! Case milestones that trigger correspondence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the case lifecycle at which parties are told what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Milestone {
    /// The application was issued by the court.
    ApplicationIssued,
    /// The respondent acknowledged service.
    AosSubmitted,
    /// The respondent did not acknowledge service in time.
    PartnerNotResponded,
    /// The conditional order was pronounced.
    ConditionalOrderPronounced,
    /// The parties may now apply for the final order.
    FinalOrderCanBeApplied,
    /// One joint applicant applied for the final order and the other has
    /// not.
    OtherPartyAppliedForFinalOrder,
    /// A joint applicant intends to proceed alone.
    PartnerIntendsToSwitchToSole,
    /// Nobody applied for the final order within the eligibility window.
    FinalOrderOverdue,
    /// The final order was granted.
    FinalOrderGranted,
    /// Welsh translation review finished and the case moved on.
    WelshTranslationReviewComplete,
}

impl Milestone {
    /// Every milestone.
    pub const ALL: [Self; 10] = [
        Self::ApplicationIssued,
        Self::AosSubmitted,
        Self::PartnerNotResponded,
        Self::ConditionalOrderPronounced,
        Self::FinalOrderCanBeApplied,
        Self::OtherPartyAppliedForFinalOrder,
        Self::PartnerIntendsToSwitchToSole,
        Self::FinalOrderOverdue,
        Self::FinalOrderGranted,
        Self::WelshTranslationReviewComplete,
    ];

    /// Returns the snake-case identifier used in template ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApplicationIssued => "application_issued",
            Self::AosSubmitted => "aos_submitted",
            Self::PartnerNotResponded => "partner_not_responded",
            Self::ConditionalOrderPronounced => "conditional_order_pronounced",
            Self::FinalOrderCanBeApplied => "final_order_can_be_applied",
            Self::OtherPartyAppliedForFinalOrder => "other_party_applied_for_final_order",
            Self::PartnerIntendsToSwitchToSole => "partner_intends_to_switch_to_sole",
            Self::FinalOrderOverdue => "final_order_overdue",
            Self::FinalOrderGranted => "final_order_granted",
            Self::WelshTranslationReviewComplete => "welsh_translation_review_complete",
        }
    }

    /// Returns `true` when offline parties are sent a letter for this
    /// milestone.
    #[must_use]
    pub const fn has_postal_channel(self) -> bool {
        matches!(
            self,
            Self::ApplicationIssued
                | Self::AosSubmitted
                | Self::ConditionalOrderPronounced
                | Self::FinalOrderGranted
        )
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
