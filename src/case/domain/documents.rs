//! References to documents generated for the case.

use super::{ApplicantRole, DocumentId, LanguagePreference};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Notice that proceedings have been issued.
    NoticeOfProceedings,
    /// Certificate that the conditional order was pronounced.
    ConditionalOrderCertificate,
    /// The final order.
    FinalOrderGrant,
    /// Letter sent to an offline party in place of an email.
    NotificationLetter,
}

impl DocumentType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoticeOfProceedings => "notice_of_proceedings",
            Self::ConditionalOrderCertificate => "conditional_order_certificate",
            Self::FinalOrderGrant => "final_order_grant",
            Self::NotificationLetter => "notification_letter",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer to a rendered document, stored on the case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    /// Document store identifier.
    pub id: DocumentId,
    /// Kind of document.
    pub document_type: DocumentType,
    /// File name presented to users.
    pub file_name: String,
    /// Language the document was rendered in.
    pub language: LanguagePreference,
    /// Party the document is addressed to, when it is party specific.
    pub party: Option<ApplicantRole>,
}
