//! Given steps for case progression scenarios.

use super::world::{CaseWorld, application, clock_on, parse_date};
use decree::case::domain::{
    ApplicantRole, ApplicationType, LanguagePreference, ServiceMethod, Solicitor, WorkflowState,
};
use decree::config::CaseConfig;
use decree::progression::FinalOrderDates;
use eyre::WrapErr;
use mockable::Clock;
use rstest_bdd_macros::given;

#[given("a sole application from an unrepresented applicant")]
fn sole_application(world: &mut CaseWorld) {
    world.pending_data = Some(application(ApplicationType::SoleApplication));
    world.pending_state = WorkflowState::Submitted;
}

#[given("a joint application")]
fn joint_application(world: &mut CaseWorld) {
    world.pending_data = Some(application(ApplicationType::JointApplication));
    world.pending_state = WorkflowState::Submitted;
}

#[given("a sole application served by the applicant's solicitor")]
fn solicitor_service_application(world: &mut CaseWorld) {
    let mut data = application(ApplicationType::SoleApplication);
    data.applicant1 = data
        .applicant1
        .with_solicitor(Solicitor::new("Morgan Price", "morgan.price@firm.example"));
    data.application.service_method = ServiceMethod::SolicitorService;
    world.pending_data = Some(data);
    world.pending_state = WorkflowState::Submitted;
}

#[given("a sole application with no marriage date")]
fn incomplete_application(world: &mut CaseWorld) {
    let mut data = application(ApplicationType::SoleApplication);
    data.application.marriage_date = None;
    world.pending_data = Some(data);
    world.pending_state = WorkflowState::Submitted;
}

#[given(r#"a sole application issued on "{date}""#)]
fn issued_sole_application(world: &mut CaseWorld, date: String) -> Result<(), eyre::Report> {
    let issue_date = parse_date(&date)?;
    let mut data = application(ApplicationType::SoleApplication);
    data.application.issue_date = Some(issue_date);
    data.due_date = issue_date.checked_add_days(chrono::Days::new(16));
    world.pending_data = Some(data);
    world.pending_state = WorkflowState::AwaitingAos;
    Ok(())
}

#[given("a joint application awaiting the final order")]
fn joint_application_awaiting_final_order(world: &mut CaseWorld) -> Result<(), eyre::Report> {
    let granted = parse_date("2024-03-01")?;
    let mut data = application(ApplicationType::JointApplication);
    data.application.issue_date = Some(parse_date("2023-09-01")?);
    let submitted = clock_on("2024-02-01")?.utc();
    data.conditional_order
        .mark_submitted(ApplicantRole::Applicant1, submitted);
    data.conditional_order
        .mark_submitted(ApplicantRole::Applicant2, submitted);
    data.conditional_order.granted_date = Some(granted);
    FinalOrderDates::from_grant(granted, &CaseConfig::default())
        .wrap_err("final order dates")?
        .apply_to(&mut data);
    world.pending_data = Some(data);
    world.pending_state = WorkflowState::AwaitingJointFinalOrder;
    Ok(())
}

#[given("applicant 2 prefers Welsh")]
fn applicant2_prefers_welsh(world: &mut CaseWorld) -> Result<(), eyre::Report> {
    world.data_mut()?.applicant2.language_preference = LanguagePreference::Welsh;
    Ok(())
}

#[given(r#"applicant 1 applied for the final order on "{date}""#)]
fn applicant1_applied(world: &mut CaseWorld, date: String) -> Result<(), eyre::Report> {
    let applied = clock_on(&date)?.utc();
    world
        .data_mut()?
        .final_order
        .mark_applied(ApplicantRole::Applicant1, applied);
    Ok(())
}
