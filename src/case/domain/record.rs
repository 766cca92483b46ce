//! Case record aggregate root and its data.

use super::{
    AcknowledgementOfService, Applicant, ApplicantRole, Application, ApplicationType,
    CaseDomainError, CaseId, CaseInvite, ConditionalOrder, DivorceOrDissolution,
    DocumentReference, FinalOrder, WorkflowState,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Everything known about the case, threaded through every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseData {
    /// Sole or joint application.
    pub application_type: ApplicationType,
    /// Divorce or dissolution of a civil partnership.
    pub divorce_or_dissolution: DivorceOrDissolution,
    /// Application details.
    pub application: Application,
    /// Applicant 1.
    pub applicant1: Applicant,
    /// Applicant 2, the respondent in sole applications.
    pub applicant2: Applicant,
    /// Respondent's acknowledgement of service.
    pub acknowledgement_of_service: AcknowledgementOfService,
    /// Conditional order.
    pub conditional_order: ConditionalOrder,
    /// Final order.
    pub final_order: FinalOrder,
    /// Documents generated for the case, oldest first.
    pub documents: Vec<DocumentReference>,
    /// Invitation for applicant 2.
    pub case_invite: CaseInvite,
    /// Current deadline. Always derived; `None` when no deadline applies.
    pub due_date: Option<NaiveDate>,
    /// State to return to once Welsh translation review completes.
    pub welsh_previous_state: Option<WorkflowState>,
}

impl CaseData {
    /// Creates case data for the given application type.
    #[must_use]
    pub fn new(
        application_type: ApplicationType,
        divorce_or_dissolution: DivorceOrDissolution,
        applicant1: Applicant,
        applicant2: Applicant,
    ) -> Self {
        Self {
            application_type,
            divorce_or_dissolution,
            applicant1,
            applicant2,
            ..Self::default()
        }
    }

    /// Returns `true` for sole applications.
    #[must_use]
    pub const fn is_sole(&self) -> bool {
        self.application_type.is_sole()
    }

    /// Returns `true` for joint applications.
    #[must_use]
    pub const fn is_joint(&self) -> bool {
        self.application_type.is_joint()
    }

    /// Returns `true` when a solicitor started the case for applicant 1.
    #[must_use]
    pub const fn is_solicitor_application(&self) -> bool {
        self.applicant1.is_represented()
    }

    /// Returns the applicant in the given role.
    #[must_use]
    pub const fn applicant(&self, role: ApplicantRole) -> &Applicant {
        match role {
            ApplicantRole::Applicant1 => &self.applicant1,
            ApplicantRole::Applicant2 => &self.applicant2,
        }
    }

    /// Returns the applicant in the given role for modification.
    pub const fn applicant_mut(&mut self, role: ApplicantRole) -> &mut Applicant {
        match role {
            ApplicantRole::Applicant1 => &mut self.applicant1,
            ApplicantRole::Applicant2 => &mut self.applicant2,
        }
    }

    /// Returns `true` when either party submitted answers in Welsh.
    #[must_use]
    pub const fn used_welsh_translation(&self) -> bool {
        self.applicant1.used_welsh_translation_on_submission
            || self.applicant2.used_welsh_translation_on_submission
    }

    /// Returns the most recent document of the given type addressed to the
    /// given party.
    #[must_use]
    pub fn latest_document(
        &self,
        document_type: super::DocumentType,
        party: Option<ApplicantRole>,
    ) -> Option<&DocumentReference> {
        self.documents
            .iter()
            .rev()
            .find(|document| document.document_type == document_type && document.party == party)
    }
}

/// Case aggregate root.
///
/// The identifier is fixed once assigned; state and data change only through
/// pipeline tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    id: Option<CaseId>,
    /// Current workflow state.
    pub state: WorkflowState,
    /// Case data.
    pub data: CaseData,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCaseData {
    /// Persisted case reference.
    pub id: CaseId,
    /// Persisted workflow state.
    pub state: WorkflowState,
    /// Persisted case data.
    pub data: CaseData,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl CaseRecord {
    /// Creates a case with a reference.
    #[must_use]
    pub fn new(id: CaseId, state: WorkflowState, data: CaseData, clock: &impl Clock) -> Self {
        Self {
            id: Some(id),
            state,
            data,
            created_at: clock.utc(),
        }
    }

    /// Creates a draft that has not yet been given a reference.
    #[must_use]
    pub fn draft(data: CaseData, clock: &impl Clock) -> Self {
        Self {
            id: None,
            state: WorkflowState::Draft,
            data,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a case from persisted storage.
    #[must_use]
    pub fn from_persisted(persisted: PersistedCaseData) -> Self {
        Self {
            id: Some(persisted.id),
            state: persisted.state,
            data: persisted.data,
            created_at: persisted.created_at,
        }
    }

    /// Returns the case reference, `None` for unsaved drafts.
    #[must_use]
    pub const fn id(&self) -> Option<CaseId> {
        self.id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Assigns a reference to a draft.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDomainError::CaseIdAlreadyAssigned`] when the case
    /// already has a reference.
    pub const fn assign_id(&mut self, id: CaseId) -> Result<(), CaseDomainError> {
        if let Some(existing) = self.id {
            return Err(CaseDomainError::CaseIdAlreadyAssigned(existing));
        }
        self.id = Some(id);
        Ok(())
    }
}
