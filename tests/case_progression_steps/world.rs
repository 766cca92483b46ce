//! Shared world state for case progression BDD scenarios.

use std::sync::Arc;

use chrono::NaiveDate;
use decree::case::adapters::memory::InMemoryCaseStore;
use decree::case::domain::{
    Address, Applicant, ApplicationType, CaseData, CaseId, CaseRecord, DivorceOrDissolution,
    WorkflowState,
};
use decree::clock::FixedClock;
use decree::config::CaseConfig;
use decree::document::adapters::memory::{RecordingLetterDispatcher, TemplateDocumentRenderer};
use decree::notification::adapters::memory::RecordingNotificationDispatcher;
use decree::workflow::{CaseEvent, CasePipelines, CaseProgressionResult, CaseProgressionService};
use eyre::WrapErr;
use rstest::fixture;

/// Reference of the single case each scenario works on.
pub const CASE_REFERENCE: u64 = 1_616_591_401_473_378;

/// Scenario world for case progression behaviour tests.
pub struct CaseWorld {
    pub store: Arc<InMemoryCaseStore>,
    pub renderer: Arc<TemplateDocumentRenderer>,
    pub letters: Arc<RecordingLetterDispatcher>,
    pub notifications: Arc<RecordingNotificationDispatcher>,
    pub pending_data: Option<CaseData>,
    pub pending_state: WorkflowState,
    pub seeded: Option<CaseRecord>,
    pub last_result: Option<CaseProgressionResult<CaseRecord>>,
}

impl CaseWorld {
    /// Creates a world with in-memory collaborators.
    ///
    /// # Panics
    ///
    /// Panics when the built-in document templates do not parse.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryCaseStore::new()),
            renderer: Arc::new(TemplateDocumentRenderer::new().expect("built-in templates parse")),
            letters: Arc::new(RecordingLetterDispatcher::new()),
            notifications: Arc::new(RecordingNotificationDispatcher::new()),
            pending_data: None,
            pending_state: WorkflowState::Submitted,
            seeded: None,
            last_result: None,
        }
    }

    /// Returns the case data being prepared by Given steps.
    pub fn data_mut(&mut self) -> Result<&mut CaseData, eyre::Report> {
        self.pending_data
            .as_mut()
            .ok_or_else(|| eyre::eyre!("no case prepared in scenario world"))
    }

    /// Stores the prepared case so events can be applied to it.
    fn seed(&mut self) -> Result<(), eyre::Report> {
        if self.seeded.is_some() {
            return Ok(());
        }
        let data = self
            .pending_data
            .clone()
            .ok_or_else(|| eyre::eyre!("no case prepared in scenario world"))?;
        let record = CaseRecord::new(
            case_id()?,
            self.pending_state,
            data,
            &clock_on("2023-12-20")?,
        );
        self.store.insert(record.clone()).wrap_err("seed case")?;
        self.seeded = Some(record);
        Ok(())
    }

    /// Applies `event` on `date` after recording `answers`.
    pub fn handle_on(
        &mut self,
        date: &str,
        event: CaseEvent,
        answers: impl FnOnce(&mut CaseData),
    ) -> Result<(), eyre::Report> {
        self.seed()?;
        let clock = clock_on(date)?;
        let service = CaseProgressionService::new(
            Arc::clone(&self.store),
            Arc::new(clock),
            Arc::new(CaseConfig::default()),
            CasePipelines::new(
                self.renderer.clone(),
                self.letters.clone(),
                self.notifications.clone(),
            ),
        );
        self.last_result = Some(service.handle_with_answers(case_id()?, event, answers));
        Ok(())
    }

    /// Returns the successfully updated case from the last event.
    pub fn updated(&self) -> Result<&CaseRecord, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no event has been applied"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("unexpected progression failure: {err}"))
    }
}

impl Default for CaseWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CaseWorld {
    CaseWorld::default()
}

/// Returns the scenario case reference.
pub fn case_id() -> Result<CaseId, eyre::Report> {
    CaseId::new(CASE_REFERENCE).wrap_err("valid case reference")
}

/// Parses an ISO calendar date from a step.
pub fn parse_date(text: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").wrap_err_with(|| format!("invalid date '{text}'"))
}

/// Returns a clock pinned to mid-morning UTC on `date`.
pub fn clock_on(date: &str) -> Result<FixedClock, eyre::Report> {
    let instant = parse_date(date)?
        .and_hms_opt(9, 30, 0)
        .ok_or_else(|| eyre::eyre!("invalid time on {date}"))?
        .and_utc();
    Ok(FixedClock::new(instant))
}

/// Complete, unissued answers for an application of the given type.
#[must_use]
pub fn application(application_type: ApplicationType) -> CaseData {
    let applicant1 = Applicant::new("Sam", "Jones")
        .with_email("sam.jones@example.com")
        .with_address(Address::new("1 High Street", "Cardiff", "CF10 1AA"));
    let applicant2 = Applicant::new("Alex", "Jones")
        .with_email("alex.jones@example.com")
        .with_address(Address::new("2 Low Road", "Swansea", "SA1 1AA"));
    let mut data = CaseData::new(
        application_type,
        DivorceOrDissolution::Divorce,
        applicant1,
        applicant2,
    );
    data.application.date_submitted = NaiveDate::from_ymd_opt(2023, 12, 20)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .map(|submitted| submitted.and_utc());
    data.application.marriage_date = NaiveDate::from_ymd_opt(2015, 6, 1);
    data.application.jurisdiction_confirmed = true;
    data.application.applicant1_statement_of_truth = true;
    data.application.applicant2_statement_of_truth = application_type.is_joint();
    data
}
