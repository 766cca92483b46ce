//! Conditional order and final order records.

use super::ApplicantRole;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Conditional order applications and grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalOrder {
    /// When applicant 1 applied.
    pub applicant1_submitted: Option<DateTime<Utc>>,
    /// When applicant 2 applied (joint applications).
    pub applicant2_submitted: Option<DateTime<Utc>>,
    /// Date the conditional order was pronounced.
    pub granted_date: Option<NaiveDate>,
    /// Court that pronounced the order.
    pub court: Option<String>,
}

impl ConditionalOrder {
    /// Returns when the given applicant applied, if they have.
    #[must_use]
    pub const fn submitted_at(&self, role: ApplicantRole) -> Option<DateTime<Utc>> {
        match role {
            ApplicantRole::Applicant1 => self.applicant1_submitted,
            ApplicantRole::Applicant2 => self.applicant2_submitted,
        }
    }

    /// Records when the given applicant applied.
    pub fn mark_submitted(&mut self, role: ApplicantRole, at: DateTime<Utc>) {
        match role {
            ApplicantRole::Applicant1 => self.applicant1_submitted = Some(at),
            ApplicantRole::Applicant2 => self.applicant2_submitted = Some(at),
        }
    }

    /// Returns `true` once the order has been pronounced.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        self.granted_date.is_some()
    }
}

/// Final order applications, deadlines and grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalOrder {
    /// When applicant 1 applied.
    pub applicant1_applied: Option<DateTime<Utc>>,
    /// When applicant 2 applied.
    pub applicant2_applied: Option<DateTime<Utc>>,
    /// When applicant 1 declared they intend to continue as a sole applicant.
    pub applicant1_intends_to_switch_to_sole: Option<DateTime<Utc>>,
    /// When applicant 2 declared they intend to continue as a sole applicant.
    pub applicant2_intends_to_switch_to_sole: Option<DateTime<Utc>>,
    /// Applicant who switched a joint final order application to sole.
    pub switched_to_sole_by: Option<ApplicantRole>,
    /// First date the applicant may apply.
    pub date_eligible_from: Option<NaiveDate>,
    /// First date the respondent may apply in a sole application.
    pub date_eligible_to_respondent: Option<NaiveDate>,
    /// Date after which an application is overdue.
    pub date_no_longer_eligible: Option<NaiveDate>,
    /// When the final order was granted.
    pub granted: Option<DateTime<Utc>>,
}

impl FinalOrder {
    /// Returns when the given applicant applied, if they have.
    #[must_use]
    pub const fn applied_at(&self, role: ApplicantRole) -> Option<DateTime<Utc>> {
        match role {
            ApplicantRole::Applicant1 => self.applicant1_applied,
            ApplicantRole::Applicant2 => self.applicant2_applied,
        }
    }

    /// Records when the given applicant applied.
    pub fn mark_applied(&mut self, role: ApplicantRole, at: DateTime<Utc>) {
        match role {
            ApplicantRole::Applicant1 => self.applicant1_applied = Some(at),
            ApplicantRole::Applicant2 => self.applicant2_applied = Some(at),
        }
    }

    /// Returns when the given applicant declared an intention to switch to
    /// a sole application.
    #[must_use]
    pub const fn intention_to_switch_declared_at(
        &self,
        role: ApplicantRole,
    ) -> Option<DateTime<Utc>> {
        match role {
            ApplicantRole::Applicant1 => self.applicant1_intends_to_switch_to_sole,
            ApplicantRole::Applicant2 => self.applicant2_intends_to_switch_to_sole,
        }
    }

    /// Records an intention to switch to a sole application.
    pub fn mark_intention_to_switch(&mut self, role: ApplicantRole, at: DateTime<Utc>) {
        match role {
            ApplicantRole::Applicant1 => self.applicant1_intends_to_switch_to_sole = Some(at),
            ApplicantRole::Applicant2 => self.applicant2_intends_to_switch_to_sole = Some(at),
        }
    }

    /// Returns `true` once the final order has been granted.
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        self.granted.is_some()
    }
}
