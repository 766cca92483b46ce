//! Typed document content, one variant per document type.

use crate::case::domain::{
    Address, ApplicantRole, CaseData, CaseId, DivorceOrDissolution, DocumentType,
    LanguagePreference,
};
use crate::notification::domain::{NotificationTemplate, TemplateVars, format_date};
use serde::Serialize;
use thiserror::Error;

/// Case data needed for a document was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot generate {document_type}: {missing} is not set")]
pub struct MissingContentError {
    /// Document that could not be built.
    pub document_type: DocumentType,
    /// Name of the absent value.
    pub missing: &'static str,
}

impl From<MissingContentError> for crate::pipeline::TaskError {
    fn from(err: MissingContentError) -> Self {
        Self::inconsistency(err.to_string())
    }
}

/// Notice that proceedings were issued, addressed to one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeOfProceedings {
    /// Case reference grouped for display.
    pub case_reference: String,
    /// Party the notice is addressed to.
    pub party: ApplicantRole,
    /// Addressee name.
    pub recipient_name: String,
    /// Other party's name.
    pub partner_name: String,
    /// "spouse" or "civil partner".
    pub partner_term: &'static str,
    /// Issue date, formatted.
    pub issue_date: String,
    /// Response deadline, formatted.
    pub due_date: Option<String>,
    /// Access code for linking the other party's account.
    pub access_code: Option<String>,
    /// `true` for a joint application.
    pub is_joint: bool,
}

/// Certificate of entitlement to a conditional order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionalOrderCertificate {
    /// Case reference grouped for display.
    pub case_reference: String,
    /// Applicant 1 name.
    pub applicant1_name: String,
    /// Applicant 2 name.
    pub applicant2_name: String,
    /// Pronouncement date, formatted.
    pub granted_date: String,
    /// Court that pronounced the order.
    pub court: Option<String>,
    /// First date a final order may be applied for, formatted.
    pub final_order_eligible_from: String,
}

/// The final order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalOrderGrant {
    /// Case reference grouped for display.
    pub case_reference: String,
    /// Applicant 1 name.
    pub applicant1_name: String,
    /// Applicant 2 name.
    pub applicant2_name: String,
    /// Marriage or civil partnership date, formatted.
    pub marriage_date: Option<String>,
    /// Grant date, formatted.
    pub granted_date: String,
    /// `true` for divorce, `false` for dissolution.
    pub is_divorce: bool,
}

/// Letter standing in for an email to an offline party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationLetter {
    /// Party the letter is addressed to.
    pub party: ApplicantRole,
    /// Addressee name.
    pub recipient_name: String,
    /// Postal address lines.
    pub address_lines: Vec<String>,
    /// Template the letter replaces.
    pub template_id: String,
    /// Values the template would have received.
    pub vars: TemplateVars,
}

/// Content for one generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "document_type", rename_all = "snake_case")]
pub enum DocumentContent {
    /// Notice of proceedings.
    NoticeOfProceedings(NoticeOfProceedings),
    /// Conditional order certificate.
    ConditionalOrderCertificate(ConditionalOrderCertificate),
    /// Final order.
    FinalOrderGrant(FinalOrderGrant),
    /// Notification letter.
    NotificationLetter(NotificationLetter),
}

impl DocumentContent {
    /// Builds the notice of proceedings for `party`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingContentError`] when the case has no reference or no
    /// issue date.
    pub fn notice_of_proceedings(
        case_id: Option<CaseId>,
        data: &CaseData,
        party: ApplicantRole,
        language: LanguagePreference,
    ) -> Result<Self, MissingContentError> {
        let missing = |name| MissingContentError {
            document_type: DocumentType::NoticeOfProceedings,
            missing: name,
        };
        let case_reference = case_id.ok_or_else(|| missing("case reference"))?.formatted();
        let issue_date = data
            .application
            .issue_date
            .ok_or_else(|| missing("issue date"))?;
        Ok(Self::NoticeOfProceedings(NoticeOfProceedings {
            case_reference,
            party,
            recipient_name: data.applicant(party).full_name(),
            partner_name: data.applicant(party.other()).full_name(),
            partner_term: data.divorce_or_dissolution.partner_term(),
            issue_date: format_date(issue_date, language),
            due_date: data.due_date.map(|date| format_date(date, language)),
            access_code: data
                .case_invite
                .access_code
                .as_ref()
                .map(|code| code.as_str().to_owned()),
            is_joint: data.is_joint(),
        }))
    }

    /// Builds the conditional order certificate.
    ///
    /// # Errors
    ///
    /// Returns [`MissingContentError`] when the case has no reference, the
    /// order has not been pronounced, or final order dates are unset.
    pub fn conditional_order_certificate(
        case_id: Option<CaseId>,
        data: &CaseData,
        language: LanguagePreference,
    ) -> Result<Self, MissingContentError> {
        let missing = |name| MissingContentError {
            document_type: DocumentType::ConditionalOrderCertificate,
            missing: name,
        };
        let case_reference = case_id.ok_or_else(|| missing("case reference"))?.formatted();
        let granted = data
            .conditional_order
            .granted_date
            .ok_or_else(|| missing("conditional order grant date"))?;
        let eligible_from = data
            .final_order
            .date_eligible_from
            .ok_or_else(|| missing("final order eligibility date"))?;
        Ok(Self::ConditionalOrderCertificate(ConditionalOrderCertificate {
            case_reference,
            applicant1_name: data.applicant1.full_name(),
            applicant2_name: data.applicant2.full_name(),
            granted_date: format_date(granted, language),
            court: data.conditional_order.court.clone(),
            final_order_eligible_from: format_date(eligible_from, language),
        }))
    }

    /// Builds the final order.
    ///
    /// # Errors
    ///
    /// Returns [`MissingContentError`] when the case has no reference or the
    /// final order has not been granted.
    pub fn final_order_grant(
        case_id: Option<CaseId>,
        data: &CaseData,
        language: LanguagePreference,
    ) -> Result<Self, MissingContentError> {
        let missing = |name| MissingContentError {
            document_type: DocumentType::FinalOrderGrant,
            missing: name,
        };
        let case_reference = case_id.ok_or_else(|| missing("case reference"))?.formatted();
        let granted = data
            .final_order
            .granted
            .ok_or_else(|| missing("final order grant date"))?;
        Ok(Self::FinalOrderGrant(FinalOrderGrant {
            case_reference,
            applicant1_name: data.applicant1.full_name(),
            applicant2_name: data.applicant2.full_name(),
            marriage_date: data
                .application
                .marriage_date
                .map(|date| format_date(date, language)),
            granted_date: format_date(granted.date_naive(), language),
            is_divorce: data.divorce_or_dissolution == DivorceOrDissolution::Divorce,
        }))
    }

    /// Builds a letter replacing `template` for an offline party.
    #[must_use]
    pub fn notification_letter(
        party: ApplicantRole,
        recipient_name: String,
        address: &Address,
        template: NotificationTemplate,
        vars: TemplateVars,
    ) -> Self {
        Self::NotificationLetter(NotificationLetter {
            party,
            recipient_name,
            address_lines: address.lines(),
            template_id: template.id(),
            vars,
        })
    }

    /// Returns the document type.
    #[must_use]
    pub const fn document_type(&self) -> DocumentType {
        match self {
            Self::NoticeOfProceedings(_) => DocumentType::NoticeOfProceedings,
            Self::ConditionalOrderCertificate(_) => DocumentType::ConditionalOrderCertificate,
            Self::FinalOrderGrant(_) => DocumentType::FinalOrderGrant,
            Self::NotificationLetter(_) => DocumentType::NotificationLetter,
        }
    }

    /// Returns the addressee for party-specific documents.
    #[must_use]
    pub const fn party(&self) -> Option<ApplicantRole> {
        match self {
            Self::NoticeOfProceedings(notice) => Some(notice.party),
            Self::NotificationLetter(letter) => Some(letter.party),
            Self::ConditionalOrderCertificate(_) | Self::FinalOrderGrant(_) => None,
        }
    }
}
