//! Unit tests for deadline calculation.

use crate::case::domain::{ServiceMethod, WorkflowState};
use crate::config::CaseConfig;
use crate::pipeline::TaskError;
use crate::progression::due_date::{
    DueDateError, FinalOrderDates, add_days, due_date_after_aos, due_date_after_issue,
    due_date_after_reissue, due_date_after_service, has_reached, holding_period_due_date, is_past,
};
use crate::test_support::{
    config, date, instant, issued, joint_data, sole_data, solicitor, solicitor_service_data,
};
use chrono::NaiveDate;
use rstest::rstest;

#[rstest]
fn sole_citizen_application_is_due_after_sole_offset() {
    let data = issued(sole_data(), date(2024, 1, 1));

    let due = due_date_after_issue(&data, &config()).expect("due date");

    assert_eq!(due, Some(date(2024, 1, 17)));
}

#[rstest]
#[case(false)]
#[case(true)]
fn joint_application_is_due_after_holding_period(#[case] represented: bool) {
    let mut data = issued(joint_data(), date(2024, 1, 1));
    if represented {
        data.applicant1 = data.applicant1.with_solicitor(solicitor());
    }

    let due = due_date_after_issue(&data, &config()).expect("due date");

    assert_eq!(due, Some(date(2024, 5, 21)));
}

#[rstest]
fn solicitor_service_leaves_due_date_unset() {
    let data = issued(solicitor_service_data(), date(2024, 1, 1));

    let due = due_date_after_issue(&data, &config()).expect("due date");

    assert_eq!(due, None);
}

#[rstest]
#[case(ServiceMethod::CourtService)]
#[case(ServiceMethod::PersonalService)]
fn solicitor_application_without_solicitor_service_uses_pack_offset(
    #[case] method: ServiceMethod,
) {
    let mut data = issued(solicitor_service_data(), date(2024, 1, 1));
    data.application.service_method = method;
    let config = CaseConfig {
        aos_pack_due_date_offset_days: 30,
        ..CaseConfig::default()
    };

    let due = due_date_after_issue(&data, &config).expect("due date");

    assert_eq!(due, Some(date(2024, 1, 31)));
}

#[rstest]
fn issue_due_date_requires_issue_date() {
    let result = due_date_after_issue(&sole_data(), &config());

    assert_eq!(result, Err(DueDateError::MissingIssueDate));
}

#[rstest]
fn recomputing_due_date_does_not_drift() {
    let data = issued(joint_data(), date(2024, 1, 1));
    let config = config();

    let first = due_date_after_issue(&data, &config).expect("first computation");
    let second = due_date_after_issue(&data, &config).expect("second computation");

    assert_eq!(first, second);
}

#[rstest]
fn reissue_is_due_after_pack_offset_from_today() {
    let due = due_date_after_reissue(date(2024, 3, 10), &config()).expect("due date");

    assert_eq!(due, date(2024, 3, 26));
}

#[rstest]
fn confirmed_service_runs_holding_period_from_issue() {
    let mut data = issued(solicitor_service_data(), date(2024, 1, 1));
    data.application.solicitor_service.date_of_service = Some(date(2024, 1, 5));

    let due = due_date_after_service(&data, &config()).expect("due date");

    assert_eq!(due, date(2024, 5, 21));
}

#[rstest]
fn confirmed_service_requires_date_of_service() {
    let data = issued(solicitor_service_data(), date(2024, 1, 1));

    let result = due_date_after_service(&data, &config());

    assert_eq!(result, Err(DueDateError::MissingDateOfService));
}

#[rstest]
#[case(WorkflowState::Holding, Some(date(2024, 5, 21)))]
#[case(WorkflowState::Disputed, Some(date(2024, 3, 9)))]
#[case(WorkflowState::PendingDispute, Some(date(2024, 3, 9)))]
#[case(WorkflowState::WelshTranslationReview, Some(date(2024, 1, 17)))]
fn aos_due_date_follows_target_state(
    #[case] target: WorkflowState,
    #[case] expected: Option<NaiveDate>,
) {
    let mut data = issued(sole_data(), date(2024, 1, 1));
    data.due_date = Some(date(2024, 1, 17));
    data.acknowledgement_of_service.date_submitted = Some(instant(2024, 2, 1));

    let due = due_date_after_aos(&data, target, &config()).expect("due date");

    assert_eq!(due, expected);
}

#[rstest]
fn dispute_due_date_requires_aos_submission() {
    let data = issued(sole_data(), date(2024, 1, 1));

    let result = due_date_after_aos(&data, WorkflowState::Disputed, &config());

    assert_eq!(result, Err(DueDateError::MissingAosSubmission));
}

#[rstest]
fn final_order_dates_derive_from_grant() {
    let dates = FinalOrderDates::from_grant(date(2024, 3, 1), &config()).expect("dates");

    assert_eq!(dates.eligible_from, date(2024, 4, 13));
    assert_eq!(dates.eligible_to_respondent, date(2024, 7, 13));
    assert_eq!(dates.no_longer_eligible, date(2025, 3, 1));
}

#[rstest]
fn final_order_dates_clamp_to_month_end() {
    let config = CaseConfig {
        final_order_eligibility_offset_days: 0,
        respondent_final_order_offset_months: 1,
        ..CaseConfig::default()
    };

    let dates = FinalOrderDates::from_grant(date(2024, 1, 31), &config).expect("dates");

    assert_eq!(dates.eligible_to_respondent, date(2024, 2, 29));
}

#[rstest]
fn applying_final_order_dates_sets_due_date() {
    let mut data = sole_data();
    let dates = FinalOrderDates::from_grant(date(2024, 3, 1), &config()).expect("dates");

    dates.apply_to(&mut data);

    assert_eq!(data.due_date, Some(date(2024, 4, 13)));
    assert_eq!(data.final_order.date_no_longer_eligible, Some(date(2025, 3, 1)));
}

#[rstest]
fn final_order_dates_require_pronouncement() {
    let result = FinalOrderDates::for_case(&sole_data(), &config());

    assert_eq!(result, Err(DueDateError::MissingConditionalOrderGrant));
}

#[rstest]
fn overflowing_dates_are_reported() {
    assert_eq!(
        add_days(NaiveDate::MAX, 1),
        Err(DueDateError::OutOfRange {
            from: NaiveDate::MAX
        })
    );
    assert!(holding_period_due_date(NaiveDate::MAX, &config()).is_err());
}

#[rstest]
fn due_date_errors_are_data_inconsistencies() {
    let error = TaskError::from(DueDateError::MissingIssueDate);

    assert!(matches!(error, TaskError::DataInconsistency(_)));
}

#[rstest]
#[case(None, false, false)]
#[case(Some(date(2024, 1, 9)), true, true)]
#[case(Some(date(2024, 1, 10)), false, true)]
#[case(Some(date(2024, 1, 11)), false, false)]
fn deadline_comparisons(
    #[case] deadline: Option<NaiveDate>,
    #[case] past: bool,
    #[case] reached: bool,
) {
    let today = date(2024, 1, 10);

    assert_eq!(is_past(deadline, today), past);
    assert_eq!(has_reached(deadline, today), reached);
}
