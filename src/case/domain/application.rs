//! The application and how it is served.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether one or both parties started the case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    /// Applicant 1 applies alone; applicant 2 is the respondent.
    #[default]
    SoleApplication,
    /// Both applicants apply together.
    JointApplication,
}

impl ApplicationType {
    /// Returns `true` for sole applications.
    #[must_use]
    pub const fn is_sole(self) -> bool {
        matches!(self, Self::SoleApplication)
    }

    /// Returns `true` for joint applications.
    #[must_use]
    pub const fn is_joint(self) -> bool {
        matches!(self, Self::JointApplication)
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SoleApplication => "sole_application",
            Self::JointApplication => "joint_application",
        }
    }
}

/// Whether the case ends a marriage or a civil partnership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivorceOrDissolution {
    /// Ending a marriage.
    #[default]
    Divorce,
    /// Ending a civil partnership.
    Dissolution,
}

impl DivorceOrDissolution {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Divorce => "divorce",
            Self::Dissolution => "dissolution",
        }
    }

    /// Returns the word used for the other party in correspondence.
    #[must_use]
    pub const fn partner_term(self) -> &'static str {
        match self {
            Self::Divorce => "spouse",
            Self::Dissolution => "civil partner",
        }
    }
}

/// How the application is served on the respondent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceMethod {
    /// The court serves the papers by email or post.
    #[default]
    CourtService,
    /// The applicant's solicitor arranges service.
    SolicitorService,
    /// The applicant arranges personal service.
    PersonalService,
}

impl ServiceMethod {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CourtService => "court_service",
            Self::SolicitorService => "solicitor_service",
            Self::PersonalService => "personal_service",
        }
    }
}

/// Details a solicitor provides when confirming service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolicitorService {
    /// Date the respondent was served.
    pub date_of_service: Option<NaiveDate>,
    /// Service was carried out by a process server.
    pub served_by_process_server: bool,
    /// Free-text description of how service was effected.
    pub details: Option<String>,
}

/// The application as submitted to court.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// When the application was submitted.
    pub date_submitted: Option<DateTime<Utc>>,
    /// Date the court issued the application.
    pub issue_date: Option<NaiveDate>,
    /// Date the application was last reissued.
    pub reissue_date: Option<NaiveDate>,
    /// Date of the marriage or civil partnership.
    pub marriage_date: Option<NaiveDate>,
    /// How the respondent is to be served.
    pub service_method: ServiceMethod,
    /// Confirmation of service from the applicant's solicitor.
    pub solicitor_service: SolicitorService,
    /// Applicant 1 has confirmed the jurisdiction connections.
    pub jurisdiction_confirmed: bool,
    /// Applicant 1 has signed the statement of truth.
    pub applicant1_statement_of_truth: bool,
    /// Applicant 2 has signed the statement of truth (joint applications).
    pub applicant2_statement_of_truth: bool,
}

impl Application {
    /// Returns `true` when the applicant's solicitor serves the respondent.
    #[must_use]
    pub const fn is_solicitor_service_method(&self) -> bool {
        matches!(self.service_method, ServiceMethod::SolicitorService)
    }

    /// Returns `true` when the court serves the respondent.
    #[must_use]
    pub const fn is_court_service_method(&self) -> bool {
        matches!(self.service_method, ServiceMethod::CourtService)
    }

    /// Returns `true` once the application has been issued.
    #[must_use]
    pub const fn is_issued(&self) -> bool {
        self.issue_date.is_some()
    }
}
