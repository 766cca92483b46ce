//! Integration test walking a sole divorce from issue to final order.
#![expect(
    clippy::expect_used,
    reason = "test fixtures panic on invalid calendar data"
)]

use std::sync::Arc;

use chrono::NaiveDate;
use decree::case::adapters::memory::InMemoryCaseStore;
use decree::case::domain::{
    Address, Applicant, ApplicantRole, ApplicationType, CaseData, CaseId, CaseRecord,
    DivorceOrDissolution, DocumentType, HowToRespond, WorkflowState,
};
use decree::case::ports::CaseStore;
use decree::clock::FixedClock;
use decree::config::CaseConfig;
use decree::document::adapters::memory::{RecordingLetterDispatcher, TemplateDocumentRenderer};
use decree::notification::adapters::memory::RecordingNotificationDispatcher;
use decree::workflow::{CaseEvent, CasePipelines, CaseProgressionService};
use rstest::{fixture, rstest};

type TestService = CaseProgressionService<InMemoryCaseStore, FixedClock>;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn case_id() -> CaseId {
    CaseId::new(1_616_591_401_473_378).expect("valid case reference")
}

fn clock_at(day: NaiveDate) -> FixedClock {
    FixedClock::new(day.and_hms_opt(9, 30, 0).expect("valid time").and_utc())
}

struct Court {
    store: Arc<InMemoryCaseStore>,
    pipelines: CasePipelines,
    notifications: Arc<RecordingNotificationDispatcher>,
    letters: Arc<RecordingLetterDispatcher>,
}

impl Court {
    fn on(&self, day: NaiveDate) -> TestService {
        CaseProgressionService::new(
            Arc::clone(&self.store),
            Arc::new(clock_at(day)),
            Arc::new(CaseConfig::default()),
            self.pipelines.clone(),
        )
    }
}

#[fixture]
fn court() -> Court {
    let mut data = CaseData::new(
        ApplicationType::SoleApplication,
        DivorceOrDissolution::Divorce,
        Applicant::new("Sam", "Jones")
            .with_email("sam.jones@example.com")
            .with_address(Address::new("1 High Street", "Cardiff", "CF10 1AA")),
        Applicant::new("Alex", "Jones")
            .with_email("alex.jones@example.com")
            .with_address(Address::new("2 Low Road", "Swansea", "SA1 1AA")),
    );
    data.application.date_submitted = Some(
        date(2023, 12, 20)
            .and_hms_opt(9, 30, 0)
            .expect("valid time")
            .and_utc(),
    );
    data.application.marriage_date = Some(date(2015, 6, 1));
    data.application.jurisdiction_confirmed = true;
    data.application.applicant1_statement_of_truth = true;

    let store = Arc::new(InMemoryCaseStore::new());
    store
        .insert(CaseRecord::new(
            case_id(),
            WorkflowState::Submitted,
            data,
            &clock_at(date(2023, 12, 20)),
        ))
        .expect("seed case");

    let notifications = Arc::new(RecordingNotificationDispatcher::new());
    let letters = Arc::new(RecordingLetterDispatcher::new());
    let renderer = Arc::new(TemplateDocumentRenderer::new().expect("built-in templates parse"));
    Court {
        store,
        pipelines: CasePipelines::new(renderer, letters.clone(), notifications.clone()),
        notifications,
        letters,
    }
}

fn count_of(record: &CaseRecord, document_type: DocumentType) -> usize {
    record
        .data
        .documents
        .iter()
        .filter(|document| document.document_type == document_type)
        .count()
}

#[rstest]
fn sole_divorce_reaches_final_order(court: Court) -> eyre::Result<()> {
    let issued = court
        .on(date(2024, 1, 1))
        .handle(case_id(), CaseEvent::IssueApplication)?;
    assert_eq!(issued.state, WorkflowState::AwaitingAos);
    assert_eq!(issued.data.due_date, Some(date(2024, 1, 17)));

    let acknowledged =
        court
            .on(date(2024, 2, 1))
            .handle_with_answers(case_id(), CaseEvent::SubmitAos, |answers| {
                let aos = &mut answers.acknowledgement_of_service;
                aos.confirm_read_application = true;
                aos.jurisdiction_agree = Some(true);
                aos.how_to_respond = Some(HowToRespond::WithoutDispute);
                aos.statement_of_truth = true;
            })?;
    assert_eq!(acknowledged.state, WorkflowState::Holding);
    assert_eq!(acknowledged.data.due_date, Some(date(2024, 5, 21)));

    let released = court
        .on(date(2024, 5, 21))
        .handle(case_id(), CaseEvent::ProgressHeldCase)?;
    assert_eq!(released.state, WorkflowState::AwaitingConditionalOrder);
    assert_eq!(released.data.due_date, None);

    let applied = court.on(date(2024, 5, 22)).handle(
        case_id(),
        CaseEvent::SubmitConditionalOrder {
            by: ApplicantRole::Applicant1,
        },
    )?;
    assert_eq!(applied.state, WorkflowState::AwaitingLegalAdvisorReferral);

    let pronounced = court
        .on(date(2024, 6, 1))
        .handle(case_id(), CaseEvent::PronounceConditionalOrder)?;
    assert_eq!(pronounced.state, WorkflowState::ConditionalOrderPronounced);
    assert_eq!(pronounced.data.final_order.date_eligible_from, Some(date(2024, 7, 14)));
    assert_eq!(pronounced.data.due_date, Some(date(2024, 7, 14)));

    let eligible = court
        .on(date(2024, 7, 14))
        .handle(case_id(), CaseEvent::ProgressToAwaitingFinalOrder)?;
    assert_eq!(eligible.state, WorkflowState::AwaitingFinalOrder);

    let requested = court.on(date(2024, 7, 15)).handle(
        case_id(),
        CaseEvent::ApplyForFinalOrder {
            by: ApplicantRole::Applicant1,
        },
    )?;
    assert_eq!(requested.state, WorkflowState::FinalOrderRequested);

    let granted = court
        .on(date(2024, 7, 20))
        .handle(case_id(), CaseEvent::GrantFinalOrder)?;
    assert_eq!(granted.state, WorkflowState::FinalOrderComplete);
    assert_eq!(granted.data.due_date, None);
    assert_eq!(count_of(&granted, DocumentType::NoticeOfProceedings), 2);
    assert_eq!(count_of(&granted, DocumentType::ConditionalOrderCertificate), 1);
    assert_eq!(count_of(&granted, DocumentType::FinalOrderGrant), 1);

    assert_eq!(court.store.load(case_id())?, granted);
    assert!(!court.notifications.sent()?.is_empty());
    assert!(court.letters.sent()?.is_empty());
    Ok(())
}

#[rstest]
fn rejected_event_leaves_the_stored_case_alone(court: Court) -> eyre::Result<()> {
    let before = court.store.load(case_id())?;

    let result = court.on(date(2024, 1, 1)).handle(case_id(), CaseEvent::GrantFinalOrder);

    assert!(result.is_err());
    assert_eq!(court.store.load(case_id())?, before);
    assert!(court.notifications.sent()?.is_empty());
    Ok(())
}
