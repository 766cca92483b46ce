//! Conditional and final order tasks.

use crate::case::domain::{ApplicantRole, CaseData, CaseRecord, WorkflowState};
use crate::notification::domain::format_date;
use crate::pipeline::{CaseTask, TaskContext, TaskError, TaskResult, ValidationErrors};
use crate::progression::Transition;
use crate::progression::due_date::FinalOrderDates;
use crate::progression::transition::{
    state_after_conditional_order, state_after_final_order, state_after_welsh_translation_review,
    switch_to_sole_blockers,
};
use chrono::NaiveDate;

/// Records a conditional order application by one party.
#[derive(Debug, Clone, Copy)]
pub struct SubmitConditionalOrder {
    by: ApplicantRole,
}

impl SubmitConditionalOrder {
    /// Creates the task for the applying party.
    #[must_use]
    pub const fn by(by: ApplicantRole) -> Self {
        Self { by }
    }

    fn messages(&self, data: &CaseData) -> Vec<String> {
        let mut messages = Vec::new();
        if data.is_sole() && self.by == ApplicantRole::Applicant2 {
            messages.push(
                "Only applicant 1 can apply for a conditional order in a sole application"
                    .to_owned(),
            );
        }
        if data.conditional_order.submitted_at(self.by).is_some() {
            messages.push(format!(
                "{} has already applied for a conditional order",
                self.by.label()
            ));
        }
        messages
    }
}

impl CaseTask for SubmitConditionalOrder {
    fn name(&self) -> &'static str {
        "submit-conditional-order"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        ValidationErrors::check(self.messages(&record.data))?;
        let now = ctx.now();
        let target = state_after_conditional_order(&record.data, self.by, now);
        record.data.conditional_order.mark_submitted(self.by, now);
        Transition::to(target)
            .with_welsh_review(&record.data, ctx.config())
            .apply(&mut record);
        Ok(record)
    }
}

/// Pronounces the conditional order and derives the final order dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PronounceConditionalOrder;

impl CaseTask for PronounceConditionalOrder {
    fn name(&self) -> &'static str {
        "pronounce-conditional-order"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        let data = &record.data;
        let mut missing: Vec<ApplicantRole> = vec![ApplicantRole::Applicant1];
        if data.is_joint() {
            missing.push(ApplicantRole::Applicant2);
        }
        missing.retain(|role| data.conditional_order.submitted_at(*role).is_none());
        ValidationErrors::check(
            missing
                .into_iter()
                .map(|role| format!("{} has not applied for a conditional order", role.label()))
                .collect(),
        )?;

        record.data.conditional_order.granted_date = Some(ctx.today());
        FinalOrderDates::for_case(&record.data, ctx.config())?.apply_to(&mut record.data);
        record.state = WorkflowState::ConditionalOrderPronounced;
        Ok(record)
    }
}

/// Records a final order application by one party.
#[derive(Debug, Clone, Copy)]
pub struct ApplyForFinalOrder {
    by: ApplicantRole,
}

impl ApplyForFinalOrder {
    /// Creates the task for the applying party.
    #[must_use]
    pub const fn by(by: ApplicantRole) -> Self {
        Self { by }
    }

    fn messages(&self, data: &CaseData, today: NaiveDate) -> TaskResult<Vec<String>> {
        let final_order = &data.final_order;
        let eligible_date = if data.is_sole() && self.by == ApplicantRole::Applicant2 {
            final_order.date_eligible_to_respondent
        } else {
            final_order.date_eligible_from
        };
        let first_eligible = eligible_date.ok_or_else(|| {
            TaskError::inconsistency("final order eligibility dates have not been set")
        })?;

        let mut messages = Vec::new();
        if final_order.applied_at(self.by).is_some() {
            messages.push(format!("{} has already applied for the final order", self.by.label()));
        }
        if today < first_eligible {
            messages.push(format!(
                "{} cannot apply for the final order until {}",
                self.by.label(),
                format_date(first_eligible, data.applicant(self.by).language_preference)
            ));
        }
        Ok(messages)
    }
}

impl CaseTask for ApplyForFinalOrder {
    fn name(&self) -> &'static str {
        "apply-for-final-order"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        ValidationErrors::check(self.messages(&record.data, ctx.today())?)?;
        let now = ctx.now();
        let target = state_after_final_order(&record.data, self.by, now);
        record.data.final_order.mark_applied(self.by, now);
        Transition::to(target)
            .with_welsh_review(&record.data, ctx.config())
            .apply(&mut record);
        Ok(record)
    }
}

/// Records a joint applicant's intention to proceed alone.
#[derive(Debug, Clone, Copy)]
pub struct DeclareIntentionToSwitchToSole {
    by: ApplicantRole,
}

impl DeclareIntentionToSwitchToSole {
    /// Creates the task for the declaring party.
    #[must_use]
    pub const fn by(by: ApplicantRole) -> Self {
        Self { by }
    }
}

impl CaseTask for DeclareIntentionToSwitchToSole {
    fn name(&self) -> &'static str {
        "declare-intention-to-switch-to-sole"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        let final_order = &record.data.final_order;
        let mut messages = Vec::new();
        if final_order.applied_at(self.by).is_none() {
            messages.push(format!("{} has not applied for the final order", self.by.label()));
        }
        if final_order.applied_at(self.by.other()).is_some() {
            messages.push(format!(
                "{} has already applied for the final order",
                self.by.other().label()
            ));
        }
        if final_order.intention_to_switch_declared_at(self.by).is_some() {
            messages.push(format!(
                "{} has already declared an intention to switch to sole",
                self.by.label()
            ));
        }
        ValidationErrors::check(messages)?;

        record
            .data
            .final_order
            .mark_intention_to_switch(self.by, ctx.now());
        Ok(record)
    }
}

/// Lets a first-in-time joint applicant proceed without the other party.
#[derive(Debug, Clone, Copy)]
pub struct SwitchToSoleFinalOrder {
    by: ApplicantRole,
}

impl SwitchToSoleFinalOrder {
    /// Creates the task for the proceeding party.
    #[must_use]
    pub const fn by(by: ApplicantRole) -> Self {
        Self { by }
    }
}

impl CaseTask for SwitchToSoleFinalOrder {
    fn name(&self) -> &'static str {
        "switch-to-sole-final-order"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        ValidationErrors::check(switch_to_sole_blockers(&record.data, self.by, ctx.now()))?;
        record.data.final_order.switched_to_sole_by = Some(self.by);
        record.state = WorkflowState::FinalOrderRequested;
        Ok(record)
    }
}

/// Grants the final order; the case has no further deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantFinalOrder;

impl CaseTask for GrantFinalOrder {
    fn name(&self) -> &'static str {
        "grant-final-order"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        if record.data.final_order.is_granted() {
            return Err(TaskError::validation("Final order has already been granted"));
        }
        record.data.final_order.granted = Some(ctx.now());
        record.data.due_date = None;
        record.state = WorkflowState::FinalOrderComplete;
        Ok(record)
    }
}

/// Restores the state the case would have entered before translation
/// review.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteWelshTranslationReview;

impl CaseTask for CompleteWelshTranslationReview {
    fn name(&self) -> &'static str {
        "complete-welsh-translation-review"
    }

    fn run(&self, mut record: CaseRecord, _ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        let previous = state_after_welsh_translation_review(&record).ok_or_else(|| {
            TaskError::inconsistency("translation review has no state to return to")
        })?;
        record.state = previous;
        record.data.welsh_previous_state = None;
        Ok(record)
    }
}
