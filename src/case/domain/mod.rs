//! Domain model for a divorce or dissolution case.
//!
//! The case domain holds the case record aggregate and the value types it is
//! made of. Nothing in here performs I/O; progression rules live in
//! [`crate::progression`] and persistence behind [`crate::case::ports`].

mod aos;
mod applicant;
mod application;
mod documents;
mod error;
mod ids;
mod invite;
mod orders;
mod record;
mod state;

pub use aos::{AcknowledgementOfService, HowToRespond};
pub use applicant::{Address, Applicant, ApplicantRole, LanguagePreference, Solicitor};
pub use application::{
    Application, ApplicationType, DivorceOrDissolution, ServiceMethod, SolicitorService,
};
pub use documents::{DocumentReference, DocumentType};
pub use error::{CaseDomainError, ParseWorkflowStateError};
pub use ids::{CaseId, DocumentId};
pub use invite::{AccessCode, CaseInvite};
pub use orders::{ConditionalOrder, FinalOrder};
pub use record::{CaseData, CaseRecord, PersistedCaseData};
pub use state::WorkflowState;
