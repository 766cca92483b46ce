//! Deadline calculation.
//!
//! Due dates are always derived from a source date plus a configured offset,
//! using calendar days, weeks and months only. Callers supply "today"; these
//! functions never read a clock.

use crate::case::domain::{CaseData, WorkflowState};
use crate::config::CaseConfig;
use crate::pipeline::TaskError;
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a deadline cannot be derived.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DueDateError {
    /// The application has not been issued.
    #[error("due date requested for a case with no issue date")]
    MissingIssueDate,
    /// No date of service was recorded.
    #[error("due date requested with no date of service")]
    MissingDateOfService,
    /// The acknowledgement of service has not been submitted.
    #[error("due date requested with no acknowledgement of service submission date")]
    MissingAosSubmission,
    /// The conditional order has not been pronounced.
    #[error("final order dates requested with no conditional order grant date")]
    MissingConditionalOrderGrant,
    /// Date arithmetic left the representable range.
    #[error("date {from} cannot be moved forward by the configured offset")]
    OutOfRange {
        /// Source date.
        from: NaiveDate,
    },
}

impl From<DueDateError> for TaskError {
    fn from(err: DueDateError) -> Self {
        Self::inconsistency(err.to_string())
    }
}

/// Result type for deadline calculations.
pub type DueDateResult<T> = Result<T, DueDateError>;

/// Adds calendar days.
///
/// # Errors
///
/// Returns [`DueDateError::OutOfRange`] on overflow.
pub fn add_days(from: NaiveDate, days: u32) -> DueDateResult<NaiveDate> {
    from.checked_add_days(Days::new(u64::from(days)))
        .ok_or(DueDateError::OutOfRange { from })
}

/// Adds calendar months, clamping to the end of shorter months.
///
/// # Errors
///
/// Returns [`DueDateError::OutOfRange`] on overflow.
pub fn add_months(from: NaiveDate, months: u32) -> DueDateResult<NaiveDate> {
    from.checked_add_months(Months::new(months))
        .ok_or(DueDateError::OutOfRange { from })
}

/// End of the holding period that starts on `from`: the configured number of
/// weeks plus one day.
///
/// # Errors
///
/// Returns [`DueDateError::OutOfRange`] on overflow.
pub fn holding_period_due_date(from: NaiveDate, config: &CaseConfig) -> DueDateResult<NaiveDate> {
    let days = u64::from(config.holding_period_in_weeks) * 7 + 1;
    from.checked_add_days(Days::new(days))
        .ok_or(DueDateError::OutOfRange { from })
}

/// Due date set when the application is issued.
///
/// | application | solicitor | service method | due date |
/// |---|---|---|---|
/// | joint | any | any | issue + holding period + 1 day |
/// | sole | no | any | issue + sole offset |
/// | sole | yes | solicitor service | none |
/// | sole | yes | other | issue + AoS pack offset |
///
/// # Errors
///
/// Returns [`DueDateError::MissingIssueDate`] before issue and
/// [`DueDateError::OutOfRange`] on overflow.
pub fn due_date_after_issue(data: &CaseData, config: &CaseConfig) -> DueDateResult<Option<NaiveDate>> {
    let issue_date = data
        .application
        .issue_date
        .ok_or(DueDateError::MissingIssueDate)?;

    if data.is_joint() {
        return holding_period_due_date(issue_date, config).map(Some);
    }
    if !data.is_solicitor_application() {
        return add_days(issue_date, config.sole_due_date_offset_days).map(Some);
    }
    if data.application.is_solicitor_service_method() {
        return Ok(None);
    }
    add_days(issue_date, config.aos_pack_due_date_offset_days).map(Some)
}

/// Due date set when an application is reissued on `today`.
///
/// # Errors
///
/// Returns [`DueDateError::OutOfRange`] on overflow.
pub fn due_date_after_reissue(today: NaiveDate, config: &CaseConfig) -> DueDateResult<NaiveDate> {
    add_days(today, config.aos_pack_due_date_offset_days)
}

/// Due date once a solicitor confirms service: the holding period measured
/// from issue.
///
/// # Errors
///
/// Returns [`DueDateError::MissingDateOfService`] when service was not
/// dated, [`DueDateError::MissingIssueDate`] before issue, and
/// [`DueDateError::OutOfRange`] on overflow.
pub fn due_date_after_service(data: &CaseData, config: &CaseConfig) -> DueDateResult<NaiveDate> {
    data.application
        .solicitor_service
        .date_of_service
        .ok_or(DueDateError::MissingDateOfService)?;
    let issue_date = data
        .application
        .issue_date
        .ok_or(DueDateError::MissingIssueDate)?;
    holding_period_due_date(issue_date, config)
}

/// Due date once the acknowledgement of service moves the case to `target`.
///
/// Holding runs to the end of the holding period from issue; a dispute runs
/// from the acknowledgement date. Other targets leave the deadline as it is.
///
/// # Errors
///
/// Returns the missing-date variant for whichever source date is absent and
/// [`DueDateError::OutOfRange`] on overflow.
pub fn due_date_after_aos(
    data: &CaseData,
    target: WorkflowState,
    config: &CaseConfig,
) -> DueDateResult<Option<NaiveDate>> {
    match target {
        WorkflowState::Holding => {
            let issue_date = data
                .application
                .issue_date
                .ok_or(DueDateError::MissingIssueDate)?;
            holding_period_due_date(issue_date, config).map(Some)
        }
        WorkflowState::Disputed | WorkflowState::PendingDispute => {
            let submitted = data
                .acknowledgement_of_service
                .date_submitted
                .ok_or(DueDateError::MissingAosSubmission)?;
            add_days(submitted.date_naive(), config.dispute_due_date_offset_days).map(Some)
        }
        _ => Ok(data.due_date),
    }
}

/// Final order deadlines derived from the conditional order grant date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalOrderDates {
    /// First date the applicant may apply.
    pub eligible_from: NaiveDate,
    /// First date the respondent may apply in a sole application.
    pub eligible_to_respondent: NaiveDate,
    /// Date from which an application is overdue.
    pub no_longer_eligible: NaiveDate,
}

impl FinalOrderDates {
    /// Derives the dates from the conditional order grant date.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError::OutOfRange`] on overflow.
    pub fn from_grant(granted: NaiveDate, config: &CaseConfig) -> DueDateResult<Self> {
        let eligible_from = add_days(granted, config.final_order_eligibility_offset_days)?;
        let eligible_to_respondent =
            add_months(eligible_from, config.respondent_final_order_offset_months)?;
        let no_longer_eligible = add_months(granted, config.final_order_overdue_offset_months)?;
        Ok(Self {
            eligible_from,
            eligible_to_respondent,
            no_longer_eligible,
        })
    }

    /// Derives the dates for a case whose conditional order was pronounced.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError::MissingConditionalOrderGrant`] before
    /// pronouncement and [`DueDateError::OutOfRange`] on overflow.
    pub fn for_case(data: &CaseData, config: &CaseConfig) -> DueDateResult<Self> {
        let granted = data
            .conditional_order
            .granted_date
            .ok_or(DueDateError::MissingConditionalOrderGrant)?;
        Self::from_grant(granted, config)
    }

    /// Copies the dates onto the case.
    pub const fn apply_to(self, data: &mut CaseData) {
        data.final_order.date_eligible_from = Some(self.eligible_from);
        data.final_order.date_eligible_to_respondent = Some(self.eligible_to_respondent);
        data.final_order.date_no_longer_eligible = Some(self.no_longer_eligible);
        data.due_date = Some(self.eligible_from);
    }
}

/// Returns `true` once the deadline has passed on `today`.
#[must_use]
pub fn is_past(deadline: Option<NaiveDate>, today: NaiveDate) -> bool {
    deadline.is_some_and(|due| due < today)
}

/// Returns `true` once `today` has reached the date.
#[must_use]
pub fn has_reached(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.is_some_and(|reached| reached <= today)
}
