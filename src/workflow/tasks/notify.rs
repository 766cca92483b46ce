//! Sends the correspondence for a milestone.

use std::sync::Arc;

use crate::case::domain::{
    ApplicantRole, CaseRecord, DocumentReference, DocumentType, LanguagePreference,
};
use crate::document::domain::{DocumentContent, LetterPackId, LetterRecipient};
use crate::document::ports::{DocumentRenderer, LetterDispatcher};
use crate::notification::domain::{
    Milestone, NotificationContent, NotificationEligibility, NotificationRequest, Recipient,
};
use crate::notification::ports::NotificationDispatcher;
use crate::pipeline::{CaseTask, TaskContext, TaskError, TaskResult};

/// Collaborators used to deliver correspondence.
#[derive(Clone)]
pub struct Correspondence {
    /// Email gateway.
    pub notifications: Arc<dyn NotificationDispatcher>,
    /// Renders letters for offline parties.
    pub renderer: Arc<dyn DocumentRenderer>,
    /// Bulk print service.
    pub letters: Arc<dyn LetterDispatcher>,
}

/// Resolves who should hear about `milestone` and delivers each request.
///
/// Emails go through the notification dispatcher. Offline parties receive a
/// letter pack holding a rendered cover letter and, where the milestone has
/// one, the matching case document. Nobody being eligible is not an error.
#[derive(Clone)]
pub struct SendNotifications {
    milestone: Milestone,
    correspondence: Correspondence,
}

impl SendNotifications {
    /// Creates the task.
    #[must_use]
    pub const fn new(milestone: Milestone, correspondence: Correspondence) -> Self {
        Self {
            milestone,
            correspondence,
        }
    }

    fn send_letter(
        &self,
        record: &CaseRecord,
        request: &NotificationRequest,
        role: ApplicantRole,
    ) -> TaskResult<DocumentReference> {
        let data = &record.data;
        let party = data.applicant(role);
        let address = party.postal_address().ok_or_else(|| {
            TaskError::inconsistency(format!(
                "{} is offline but has no postal address",
                role.label()
            ))
        })?;
        let vars = NotificationContent::for_party(record.id(), data, role, request.language)
            .to_template_vars();
        let content = DocumentContent::notification_letter(
            role,
            party.full_name(),
            address,
            request.template,
            vars,
        );
        let letter = self.correspondence.renderer.render(&content, request.language)?;

        let mut pack = vec![letter.clone()];
        if let Some(enclosure) = enclosure_for(self.milestone, record, role, request.language) {
            pack.push(enclosure.clone());
        }
        let recipient = LetterRecipient {
            name: party.full_name(),
            address: address.clone(),
        };
        let pack_id = LetterPackId::derive(record.id(), self.milestone.as_str(), &recipient);
        self.correspondence
            .letters
            .send_letters(&recipient, &pack, pack_id)?;
        tracing::info!(
            milestone = %self.milestone,
            party = role.as_str(),
            %pack_id,
            documents = pack.len(),
            "letter pack sent"
        );
        Ok(letter)
    }
}

impl CaseTask for SendNotifications {
    fn name(&self) -> &'static str {
        "send-notifications"
    }

    fn run(&self, mut record: CaseRecord, ctx: &TaskContext<'_>) -> TaskResult<CaseRecord> {
        let requests =
            NotificationEligibility::new(ctx.config()).resolve(self.milestone, &record, ctx.today());
        if requests.is_empty() {
            tracing::debug!(milestone = %self.milestone, "nobody to notify");
        }

        let mut letters = Vec::new();
        for request in &requests {
            match &request.recipient {
                Recipient::Email(address) => {
                    let vars = NotificationContent::for_party(
                        record.id(),
                        &record.data,
                        request.role,
                        request.language,
                    )
                    .to_template_vars();
                    self.correspondence.notifications.send_email(
                        address,
                        request.template,
                        &vars,
                        request.language,
                        record.id(),
                    )?;
                    tracing::info!(
                        milestone = %self.milestone,
                        template = %request.template.id(),
                        party = request.role.as_str(),
                        "email sent"
                    );
                }
                Recipient::Post(role) => letters.push(self.send_letter(&record, request, *role)?),
            }
        }
        record.data.documents.extend(letters);
        Ok(record)
    }
}

/// Returns the case document enclosed with a milestone letter, preferring
/// the copy in the recipient's language.
fn enclosure_for(
    milestone: Milestone,
    record: &CaseRecord,
    role: ApplicantRole,
    language: LanguagePreference,
) -> Option<&DocumentReference> {
    let (document_type, party) = match milestone {
        Milestone::ApplicationIssued => (DocumentType::NoticeOfProceedings, Some(role)),
        Milestone::ConditionalOrderPronounced => (DocumentType::ConditionalOrderCertificate, None),
        Milestone::FinalOrderGranted => (DocumentType::FinalOrderGrant, None),
        _ => return None,
    };
    let documents = &record.data.documents;
    documents
        .iter()
        .rev()
        .find(|document| {
            document.document_type == document_type
                && document.party == party
                && document.language == language
        })
        .or_else(|| record.data.latest_document(document_type, party))
}
