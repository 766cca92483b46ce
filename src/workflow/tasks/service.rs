//! Tasks for service of the application and the respondent's acknowledgement.

use crate::case::domain::{AcknowledgementOfService, CaseRecord};
use crate::pipeline::{CaseTask, TaskContext, TaskResult, ValidationErrors};
use crate::progression::Transition;
use crate::progression::due_date::{due_date_after_aos, due_date_after_service};
use crate::progression::transition::{state_after_aos, state_after_service_confirmation};
use chrono::NaiveDate;

/// Checks the respondent's answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateAosSubmission;

impl ValidateAosSubmission {
    fn messages(aos: &AcknowledgementOfService) -> Vec<String> {
        let mut messages = Vec::new();
        if aos.is_submitted() {
            messages.push("Acknowledgement of service has already been submitted".to_owned());
        }
        if !aos.confirm_read_application {
            messages.push("The respondent must confirm they have read the application".to_owned());
        }
        match aos.jurisdiction_agree {
            None => messages.push("The respondent must answer whether they agree with jurisdiction".to_owned()),
            Some(false)
                if aos
                    .jurisdiction_disagree_reason
                    .as_deref()
                    .is_none_or(|reason| reason.trim().is_empty()) =>
            {
                messages.push("A reason for disagreeing with jurisdiction is required".to_owned());
            }
            Some(_) => {}
        }
        if aos.how_to_respond.is_none() {
            messages.push("The respondent must say how they want to respond".to_owned());
        }
        if !aos.statement_of_truth {
            messages.push("The respondent statement of truth must be accepted".to_owned());
        }
        messages
    }
}

impl CaseTask for ValidateAosSubmission {
    fn name(&self) -> &'static str {
        "validate-aos-submission"
    }

    fn run(&self, record: CaseRecord, _ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        ValidationErrors::check(Self::messages(&record.data.acknowledgement_of_service))?;
        Ok(record)
    }
}

/// Stamps the acknowledgement and moves the case on.
///
/// The due date follows the computed state even when the case is diverted
/// to Welsh translation review, so it is correct once review completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitAos;

impl CaseTask for SubmitAos {
    fn name(&self) -> &'static str {
        "submit-aos"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        record.data.acknowledgement_of_service.date_submitted = Some(ctx.now());
        let target = state_after_aos(&record.data);
        record.data.due_date = due_date_after_aos(&record.data, target, ctx.config())?;
        let transition = Transition::to(target).with_welsh_review(&record.data, ctx.config());
        transition.apply(&mut record);
        Ok(record)
    }
}

/// Checks a solicitor's certificate of service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateSolicitorService;

impl ValidateSolicitorService {
    fn messages(record: &CaseRecord, today: NaiveDate) -> Vec<String> {
        let application = &record.data.application;
        let mut messages = Vec::new();
        if !record.data.is_solicitor_application() || !application.is_solicitor_service_method() {
            messages.push("Service can only be confirmed for solicitor service applications".to_owned());
        }
        match application.solicitor_service.date_of_service {
            None => messages.push("Date of service cannot be empty".to_owned()),
            Some(date) if date > today => {
                messages.push("Date of service cannot be in the future".to_owned());
            }
            Some(date) if application.issue_date.is_some_and(|issued| date < issued) => {
                messages.push("Date of service cannot be before the issue date".to_owned());
            }
            Some(_) => {}
        }
        messages
    }
}

impl CaseTask for ValidateSolicitorService {
    fn name(&self) -> &'static str {
        "validate-solicitor-service"
    }

    fn run(&self, record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        ValidationErrors::check(Self::messages(&record, ctx.today()))?;
        Ok(record)
    }
}

/// Recomputes the due date from the holding period and moves the case when
/// a process server effected service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfirmSolicitorService;

impl CaseTask for ConfirmSolicitorService {
    fn name(&self) -> &'static str {
        "confirm-solicitor-service"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        record.data.due_date = Some(due_date_after_service(&record.data, ctx.config())?);
        record.state = state_after_service_confirmation(record.state, &record.data);
        Ok(record)
    }
}
