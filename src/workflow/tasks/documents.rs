//! Document generation task.

use std::sync::Arc;

use crate::case::domain::{ApplicantRole, CaseData, CaseRecord, LanguagePreference, ServiceMethod};
use crate::document::domain::DocumentContent;
use crate::document::ports::DocumentRenderer;
use crate::pipeline::{CaseTask, TaskContext, TaskResult};

/// Documents generated by [`GenerateDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseDocument {
    /// One notice per party served by the court.
    NoticeOfProceedings,
    /// One certificate per language the parties read.
    ConditionalOrderCertificate,
    /// One final order per language the parties read.
    FinalOrderGrant,
}

/// Renders a case document and records the reference on the case.
#[derive(Clone)]
pub struct GenerateDocument {
    document: CaseDocument,
    renderer: Arc<dyn DocumentRenderer>,
}

impl GenerateDocument {
    /// Creates the task.
    #[must_use]
    pub const fn new(document: CaseDocument, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self { document, renderer }
    }

    fn contents(&self, record: &CaseRecord) -> TaskResult<Vec<(DocumentContent, LanguagePreference)>> {
        let case_id = record.id();
        let data = &record.data;
        let contents = match self.document {
            CaseDocument::NoticeOfProceedings => notice_recipients(data)
                .into_iter()
                .map(|role| {
                    let language = data.applicant(role).language_preference;
                    DocumentContent::notice_of_proceedings(case_id, data, role, language)
                        .map(|content| (content, language))
                })
                .collect::<Result<Vec<_>, _>>()?,
            CaseDocument::ConditionalOrderCertificate => party_languages(data)
                .into_iter()
                .map(|language| {
                    DocumentContent::conditional_order_certificate(case_id, data, language)
                        .map(|content| (content, language))
                })
                .collect::<Result<Vec<_>, _>>()?,
            CaseDocument::FinalOrderGrant => party_languages(data)
                .into_iter()
                .map(|language| {
                    DocumentContent::final_order_grant(case_id, data, language)
                        .map(|content| (content, language))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(contents)
    }
}

impl CaseTask for GenerateDocument {
    fn name(&self) -> &'static str {
        match self.document {
            CaseDocument::NoticeOfProceedings => "generate-notice-of-proceedings",
            CaseDocument::ConditionalOrderCertificate => "generate-conditional-order-certificate",
            CaseDocument::FinalOrderGrant => "generate-final-order",
        }
    }

    fn run(&self, mut record: CaseRecord, _ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        for (content, language) in self.contents(&record)? {
            let reference = self.renderer.render(&content, language)?;
            record.data.documents.push(reference);
        }
        Ok(record)
    }
}

/// Applicant 1 always receives the notice; applicant 2 only when the court
/// serves them or the application is joint.
fn notice_recipients(data: &CaseData) -> Vec<ApplicantRole> {
    if data.is_joint() || data.application.service_method == ServiceMethod::CourtService {
        ApplicantRole::BOTH.to_vec()
    } else {
        vec![ApplicantRole::Applicant1]
    }
}

fn party_languages(data: &CaseData) -> Vec<LanguagePreference> {
    let mut languages = vec![data.applicant1.language_preference];
    if data.applicant2.language_preference != data.applicant1.language_preference {
        languages.push(data.applicant2.language_preference);
    }
    languages
}
