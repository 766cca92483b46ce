//! Then steps for case progression scenarios.

use super::world::{CaseWorld, case_id, parse_date};
use decree::case::domain::{DocumentType, LanguagePreference, WorkflowState};
use decree::case::ports::CaseStore;
use decree::workflow::CaseProgressionError;
use eyre::{WrapErr, ensure};
use rstest_bdd_macros::then;

#[then(r#"the case is in state "{state}""#)]
fn case_in_state(world: &mut CaseWorld, state: String) -> Result<(), eyre::Report> {
    let expected = WorkflowState::try_from(state.as_str()).wrap_err("unknown state in step")?;
    let updated = world.updated()?;
    ensure!(
        updated.state == expected,
        "expected state {expected}, found {}",
        updated.state
    );
    Ok(())
}

#[then(r#"the due date is "{date}""#)]
fn due_date_is(world: &mut CaseWorld, date: String) -> Result<(), eyre::Report> {
    let expected = parse_date(&date)?;
    let due = world.updated()?.data.due_date;
    ensure!(due == Some(expected), "expected due date {expected}, found {due:?}");
    Ok(())
}

#[then("the case has no due date")]
fn no_due_date(world: &mut CaseWorld) -> Result<(), eyre::Report> {
    let due = world.updated()?.data.due_date;
    ensure!(due.is_none(), "expected no due date, found {due:?}");
    Ok(())
}

#[then("{count:usize} notices of proceedings are on the case")]
fn notices_on_case(world: &mut CaseWorld, count: usize) -> Result<(), eyre::Report> {
    let notices = world
        .updated()?
        .data
        .documents
        .iter()
        .filter(|document| document.document_type == DocumentType::NoticeOfProceedings)
        .count();
    ensure!(notices == count, "expected {count} notices, found {notices}");
    Ok(())
}

#[then("the stored case matches the result")]
fn stored_matches(world: &mut CaseWorld) -> Result<(), eyre::Report> {
    let stored = world.store.load(case_id()?).wrap_err("load stored case")?;
    ensure!(&stored == world.updated()?, "stored case differs from the result");
    Ok(())
}

#[then(r#"the event is rejected with "{message}""#)]
fn event_rejected(world: &mut CaseWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no event has been applied"))?;
    let Err(CaseProgressionError::Pipeline(failure)) = result else {
        return Err(eyre::eyre!("expected a pipeline failure, got {result:?}"));
    };
    let messages = failure
        .error()
        .validation_messages()
        .ok_or_else(|| eyre::eyre!("expected a validation failure, got {}", failure.error()))?;
    ensure!(
        messages.contains(&message),
        "expected '{message}' among {messages:?}"
    );
    Ok(())
}

#[then("the stored case is unchanged")]
fn stored_unchanged(world: &mut CaseWorld) -> Result<(), eyre::Report> {
    let stored = world.store.load(case_id()?).wrap_err("load stored case")?;
    let seeded = world
        .seeded
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no case was seeded"))?;
    ensure!(&stored == seeded, "stored case changed after a rejected event");
    Ok(())
}

#[then("exactly {count:usize} email is sent")]
fn exactly_emails_sent(world: &mut CaseWorld, count: usize) -> Result<(), eyre::Report> {
    let sent = world.notifications.sent().wrap_err("read sent emails")?;
    ensure!(sent.len() == count, "expected {count} emails, found {}", sent.len());
    Ok(())
}

#[then("no emails are sent")]
fn no_emails_sent(world: &mut CaseWorld) -> Result<(), eyre::Report> {
    let sent = world.notifications.sent().wrap_err("read sent emails")?;
    ensure!(sent.is_empty(), "expected no emails, found {}", sent.len());
    Ok(())
}

#[then(r#""{address}" is emailed "{template}" in Welsh"#)]
fn emailed_in_welsh(
    world: &mut CaseWorld,
    address: String,
    template: String,
) -> Result<(), eyre::Report> {
    let sent = world.notifications.sent().wrap_err("read sent emails")?;
    let found = sent.iter().any(|email| {
        email.address == address
            && email.template.id() == template
            && email.language == LanguagePreference::Welsh
    });
    ensure!(found, "no Welsh '{template}' email to {address} among {sent:?}");
    Ok(())
}
