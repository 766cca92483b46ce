//! Case builders shared by unit tests.

use crate::case::domain::{
    Address, Applicant, ApplicationType, CaseData, CaseId, CaseRecord, DivorceOrDissolution,
    LanguagePreference, ServiceMethod, Solicitor, WorkflowState,
};
use crate::clock::FixedClock;
use crate::config::CaseConfig;
use chrono::{DateTime, NaiveDate, Utc};

pub const CASE_REFERENCE: u64 = 1_616_591_401_473_378;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn instant(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(9, 30, 0)
        .expect("valid time")
        .and_utc()
}

pub fn clock_at(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock::new(instant(year, month, day))
}

pub fn case_id() -> CaseId {
    CaseId::new(CASE_REFERENCE).expect("valid case reference")
}

pub fn config() -> CaseConfig {
    CaseConfig::default()
}

pub fn address() -> Address {
    Address::new("1 High Street", "Cardiff", "CF10 1AA")
}

pub fn applicant1() -> Applicant {
    Applicant::new("Sam", "Jones")
        .with_email("sam.jones@example.com")
        .with_address(address())
}

pub fn applicant2() -> Applicant {
    Applicant::new("Alex", "Jones")
        .with_email("alex.jones@example.com")
        .with_address(Address::new("2 Low Road", "Swansea", "SA1 1AA"))
}

pub fn solicitor() -> Solicitor {
    Solicitor::new("Morgan Price", "morgan.price@firm.example")
}

pub fn case_data(application_type: ApplicationType) -> CaseData {
    let mut data = CaseData::new(
        application_type,
        DivorceOrDissolution::Divorce,
        applicant1(),
        applicant2(),
    );
    data.application.date_submitted = Some(instant(2023, 12, 20));
    data.application.marriage_date = Some(date(2015, 6, 1));
    data.application.jurisdiction_confirmed = true;
    data.application.applicant1_statement_of_truth = true;
    data.application.applicant2_statement_of_truth = application_type.is_joint();
    data
}

pub fn sole_data() -> CaseData {
    case_data(ApplicationType::SoleApplication)
}

pub fn joint_data() -> CaseData {
    case_data(ApplicationType::JointApplication)
}

pub fn solicitor_service_data() -> CaseData {
    let mut data = sole_data();
    data.applicant1 = data.applicant1.with_solicitor(solicitor());
    data.application.service_method = ServiceMethod::SolicitorService;
    data
}

pub fn welsh(mut data: CaseData) -> CaseData {
    data.applicant1.language_preference = LanguagePreference::Welsh;
    data.applicant1.used_welsh_translation_on_submission = true;
    data
}

pub fn record(state: WorkflowState, data: CaseData) -> CaseRecord {
    CaseRecord::new(case_id(), state, data, &clock_at(2023, 12, 20))
}

pub fn issued(mut data: CaseData, issue_date: NaiveDate) -> CaseData {
    data.application.issue_date = Some(issue_date);
    data
}
