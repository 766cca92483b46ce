//! Tasks for issuing and reissuing an application.

use crate::case::domain::{AccessCode, ApplicantRole, CaseData, CaseRecord};
use crate::pipeline::{CaseTask, TaskContext, TaskError, TaskResult, ValidationErrors, require_case_id};
use crate::progression::due_date::{due_date_after_issue, due_date_after_reissue};
use crate::progression::transition::state_after_issue;

/// Checks the mandatory answers before the court issues the application.
///
/// Every failing answer is reported, in form order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateApplicationForIssue;

impl ValidateApplicationForIssue {
    fn messages(data: &CaseData) -> Vec<String> {
        let mut messages = Vec::new();
        if data.application.is_issued() {
            messages.push("Application has already been issued".to_owned());
        }
        for role in ApplicantRole::BOTH {
            let party = data.applicant(role);
            if party.first_name.trim().is_empty() {
                messages.push(format!("{} first name cannot be empty", role.label()));
            }
            if party.last_name.trim().is_empty() {
                messages.push(format!("{} last name cannot be empty", role.label()));
            }
        }
        if data.application.marriage_date.is_none() {
            messages.push("Marriage date cannot be empty".to_owned());
        }
        if !data.application.jurisdiction_confirmed {
            messages.push("Jurisdiction must be confirmed".to_owned());
        }
        if !data.application.applicant1_statement_of_truth {
            messages.push("Applicant 1 statement of truth must be accepted".to_owned());
        }
        if data.is_joint() && !data.application.applicant2_statement_of_truth {
            messages.push("Applicant 2 statement of truth must be accepted".to_owned());
        }
        messages
    }
}

impl CaseTask for ValidateApplicationForIssue {
    fn name(&self) -> &'static str {
        "validate-application-for-issue"
    }

    fn run(&self, record: CaseRecord, _ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        ValidationErrors::check(Self::messages(&record.data))?;
        Ok(record)
    }
}

/// Stamps the issue date and sets the post-issue due date and state.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueApplication;

impl CaseTask for IssueApplication {
    fn name(&self) -> &'static str {
        "issue-application"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        record.data.application.issue_date = Some(ctx.today());
        record.data.due_date = due_date_after_issue(&record.data, ctx.config())?;
        record.state = state_after_issue(&record.data);
        Ok(record)
    }
}

/// Restarts service of an issued application from today.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReissueApplication;

impl CaseTask for ReissueApplication {
    fn name(&self) -> &'static str {
        "reissue-application"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        if !record.data.application.is_issued() {
            return Err(TaskError::validation("Application has not been issued"));
        }
        let today = ctx.today();
        record.data.application.reissue_date = Some(today);
        record.data.due_date = Some(due_date_after_reissue(today, ctx.config())?);
        record.state = state_after_issue(&record.data);
        Ok(record)
    }
}

/// Issues an access code so applicant 2 can link to the case online.
///
/// Skipped when applicant 2 is represented or already linked.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateAccessCode;

impl CaseTask for GenerateAccessCode {
    fn name(&self) -> &'static str {
        "generate-access-code"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        let case_id = require_case_id(&record)?;
        let data = &mut record.data;
        if data.applicant2.is_represented() || data.case_invite.is_linked() {
            data.case_invite.access_code = None;
            return Ok(record);
        }
        data.case_invite.applicant2_invite_email = data.applicant2.email_address().map(str::to_owned);
        data.case_invite.access_code = Some(AccessCode::derive(
            case_id,
            ApplicantRole::Applicant2,
            ctx.now(),
        ));
        Ok(record)
    }
}
