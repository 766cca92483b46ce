//! When steps for case progression scenarios.

use super::world::CaseWorld;
use decree::case::domain::{CaseData, HowToRespond};
use decree::workflow::CaseEvent;
use rstest_bdd_macros::when;

#[when(r#"the court issues the application on "{date}""#)]
fn court_issues(world: &mut CaseWorld, date: String) -> Result<(), eyre::Report> {
    world.handle_on(&date, CaseEvent::IssueApplication, |_| {})
}

#[when(r#"the respondent acknowledges service on "{date}" disputing jurisdiction"#)]
fn respondent_disputes(world: &mut CaseWorld, date: String) -> Result<(), eyre::Report> {
    world.handle_on(&date, CaseEvent::SubmitAos, |answers| {
        acknowledge(answers, false);
    })
}

#[when(r#"the respondent acknowledges service on "{date}" agreeing to jurisdiction"#)]
fn respondent_agrees(world: &mut CaseWorld, date: String) -> Result<(), eyre::Report> {
    world.handle_on(&date, CaseEvent::SubmitAos, |answers| {
        acknowledge(answers, true);
    })
}

#[when(r#"the final order reminder runs on "{date}""#)]
fn reminder_runs(world: &mut CaseWorld, date: String) -> Result<(), eyre::Report> {
    world.handle_on(&date, CaseEvent::RemindPartnerToApplyForFinalOrder, |_| {})
}

fn acknowledge(answers: &mut CaseData, jurisdiction_agree: bool) {
    let aos = &mut answers.acknowledgement_of_service;
    aos.confirm_read_application = true;
    aos.jurisdiction_agree = Some(jurisdiction_agree);
    if !jurisdiction_agree {
        aos.jurisdiction_disagree_reason = Some("We both live in France".to_owned());
    }
    aos.how_to_respond = Some(HowToRespond::WithoutDispute);
    aos.statement_of_truth = true;
}
