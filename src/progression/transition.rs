//! Workflow state decisions.
//!
//! Every function here is pure and total: each combination of case
//! attributes maps to exactly one [`WorkflowState`]. Timed progressions
//! return `None` while the case is not yet due to move.

use super::due_date::{has_reached, is_past};
use crate::case::domain::{ApplicantRole, ApplicationType, CaseData, CaseRecord, WorkflowState};
use crate::config::CaseConfig;
use chrono::{DateTime, NaiveDate, Utc};

/// Days a first-in-time joint applicant must wait before proceeding alone,
/// and before the other party is reminded to apply.
pub const SECOND_IN_TIME_THRESHOLD_DAYS: i64 = 14;

/// A resolved state change, possibly diverted through Welsh translation
/// review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    target: WorkflowState,
    welsh_return_state: Option<WorkflowState>,
}

impl Transition {
    /// A direct move to `target`.
    #[must_use]
    pub const fn to(target: WorkflowState) -> Self {
        Self {
            target,
            welsh_return_state: None,
        }
    }

    /// Diverts to [`WorkflowState::WelshTranslationReview`] when the case
    /// requires it, remembering the state it would otherwise have entered.
    ///
    /// The diversion takes priority over every other computed state.
    #[must_use]
    pub fn with_welsh_review(self, data: &CaseData, config: &CaseConfig) -> Self {
        if self.welsh_return_state.is_some() || !requires_welsh_translation_review(data, config) {
            return self;
        }
        Self {
            target: WorkflowState::WelshTranslationReview,
            welsh_return_state: Some(self.target),
        }
    }

    /// Returns the state the case enters.
    #[must_use]
    pub const fn target(&self) -> WorkflowState {
        self.target
    }

    /// Returns the state to restore after translation review, if diverted.
    #[must_use]
    pub const fn welsh_return_state(&self) -> Option<WorkflowState> {
        self.welsh_return_state
    }

    /// Applies the transition to a record.
    pub fn apply(self, record: &mut CaseRecord) {
        record.state = self.target;
        if let Some(previous) = self.welsh_return_state {
            record.data.welsh_previous_state = Some(previous);
        }
    }
}

/// Returns `true` when applicant-submitted answers must be translated before
/// the case moves on.
#[must_use]
pub const fn requires_welsh_translation_review(data: &CaseData, config: &CaseConfig) -> bool {
    config.welsh_translation_review
        && data.applicant1.language_preference.is_welsh()
        && data.used_welsh_translation()
}

/// State after the application is issued.
#[must_use]
pub const fn state_after_issue(data: &CaseData) -> WorkflowState {
    if data.is_joint() {
        WorkflowState::Holding
    } else if data.is_solicitor_application() && data.application.is_solicitor_service_method() {
        WorkflowState::AwaitingService
    } else {
        WorkflowState::AwaitingAos
    }
}

/// State after the respondent submits the acknowledgement of service.
#[must_use]
pub const fn state_after_aos(data: &CaseData) -> WorkflowState {
    let aos = &data.acknowledgement_of_service;
    if aos.disputes_jurisdiction() {
        WorkflowState::Disputed
    } else if aos.intends_to_dispute() {
        WorkflowState::PendingDispute
    } else {
        WorkflowState::Holding
    }
}

/// State after a solicitor confirms service; unchanged unless a process
/// server effected it.
#[must_use]
pub const fn state_after_service_confirmation(
    current: WorkflowState,
    data: &CaseData,
) -> WorkflowState {
    if data.application.solicitor_service.served_by_process_server {
        WorkflowState::Holding
    } else {
        current
    }
}

/// Position of a submission relative to the other applicant's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOrder {
    /// Sole application; there is no other submission.
    Sole,
    /// Joint application, the other applicant has not yet submitted.
    FirstInTime,
    /// Joint application, the other applicant submitted at or before this
    /// submission.
    SecondInTime,
}

/// Orders a submission against the other applicant's by timestamp.
#[must_use]
pub fn submission_order(
    application_type: ApplicationType,
    submitted_at: DateTime<Utc>,
    other_submitted_at: Option<DateTime<Utc>>,
) -> SubmissionOrder {
    match application_type {
        ApplicationType::SoleApplication => SubmissionOrder::Sole,
        ApplicationType::JointApplication => match other_submitted_at {
            Some(other) if other <= submitted_at => SubmissionOrder::SecondInTime,
            _ => SubmissionOrder::FirstInTime,
        },
    }
}

/// State after `by` submits the conditional order at `submitted_at`.
#[must_use]
pub fn state_after_conditional_order(
    data: &CaseData,
    by: ApplicantRole,
    submitted_at: DateTime<Utc>,
) -> WorkflowState {
    let other = data.conditional_order.submitted_at(by.other());
    match submission_order(data.application_type, submitted_at, other) {
        SubmissionOrder::FirstInTime => WorkflowState::ConditionalOrderPending,
        SubmissionOrder::Sole | SubmissionOrder::SecondInTime => {
            WorkflowState::AwaitingLegalAdvisorReferral
        }
    }
}

/// State after `by` applies for the final order at `applied_at`.
#[must_use]
pub fn state_after_final_order(
    data: &CaseData,
    by: ApplicantRole,
    applied_at: DateTime<Utc>,
) -> WorkflowState {
    let other = data.final_order.applied_at(by.other());
    match submission_order(data.application_type, applied_at, other) {
        SubmissionOrder::FirstInTime => WorkflowState::AwaitingJointFinalOrder,
        SubmissionOrder::Sole | SubmissionOrder::SecondInTime => WorkflowState::FinalOrderRequested,
    }
}

/// Returns `true` once `today` is at least `threshold_days` UTC calendar
/// days after the day of `since`.
///
/// The final order reminder and the switch to sole share this measure, so
/// a party is never reminded before they could proceed alone.
#[must_use]
pub fn threshold_elapsed(since: DateTime<Utc>, today: NaiveDate, threshold_days: i64) -> bool {
    today.signed_duration_since(since.date_naive()).num_days() >= threshold_days
}

/// Reasons `by` may not yet switch a joint final order to sole.
///
/// Empty when the switch is allowed: the case is joint, `by` applied at least
/// [`SECOND_IN_TIME_THRESHOLD_DAYS`] days ago and declared the intention to
/// switch, and the other applicant has not applied.
#[must_use]
pub fn switch_to_sole_blockers(data: &CaseData, by: ApplicantRole, now: DateTime<Utc>) -> Vec<String> {
    let mut blockers = Vec::new();
    if !data.is_joint() {
        blockers.push("only joint applications can switch to sole".to_owned());
    }
    if data.final_order.applied_at(by.other()).is_some() {
        blockers.push(format!("{} has already applied for the final order", by.other().label()));
    }
    match data.final_order.applied_at(by) {
        None => blockers.push(format!("{} has not applied for the final order", by.label())),
        Some(applied)
            if !threshold_elapsed(applied, now.date_naive(), SECOND_IN_TIME_THRESHOLD_DAYS) =>
        {
            blockers.push(format!(
                "{} must wait {SECOND_IN_TIME_THRESHOLD_DAYS} days after applying before proceeding alone",
                by.label()
            ));
        }
        Some(_) => {}
    }
    if data.final_order.intention_to_switch_declared_at(by).is_none() {
        blockers.push(format!("{} has not declared an intention to switch to sole", by.label()));
    }
    blockers
}

/// `Holding` moves on once the holding period has ended.
#[must_use]
pub fn state_after_holding_period(record: &CaseRecord, today: NaiveDate) -> Option<WorkflowState> {
    (record.state == WorkflowState::Holding && has_reached(record.data.due_date, today))
        .then_some(WorkflowState::AwaitingConditionalOrder)
}

/// `AwaitingAos` becomes overdue once the due date has passed.
#[must_use]
pub fn state_after_aos_overdue(record: &CaseRecord, today: NaiveDate) -> Option<WorkflowState> {
    (record.state == WorkflowState::AwaitingAos && is_past(record.data.due_date, today))
        .then_some(WorkflowState::AosOverdue)
}

/// A pronounced case awaits the final order once eligibility is reached.
#[must_use]
pub fn state_after_final_order_eligibility(
    record: &CaseRecord,
    today: NaiveDate,
) -> Option<WorkflowState> {
    (record.state == WorkflowState::ConditionalOrderPronounced
        && has_reached(record.data.final_order.date_eligible_from, today))
    .then_some(WorkflowState::AwaitingFinalOrder)
}

/// A case still awaiting a final order becomes overdue once it is no longer
/// eligible.
#[must_use]
pub fn state_after_final_order_overdue(
    record: &CaseRecord,
    today: NaiveDate,
) -> Option<WorkflowState> {
    let awaiting = matches!(
        record.state,
        WorkflowState::AwaitingFinalOrder | WorkflowState::AwaitingJointFinalOrder
    );
    (awaiting && has_reached(record.data.final_order.date_no_longer_eligible, today))
        .then_some(WorkflowState::FinalOrderOverdue)
}

/// State restored when Welsh translation review completes.
#[must_use]
pub const fn state_after_welsh_translation_review(record: &CaseRecord) -> Option<WorkflowState> {
    match record.state {
        WorkflowState::WelshTranslationReview => record.data.welsh_previous_state,
        _ => None,
    }
}
