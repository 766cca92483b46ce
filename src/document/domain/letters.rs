//! Letter packs sent to parties by post.

use crate::case::domain::{Address, CaseId};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Derives a stable UUID from a SHA-256 digest of `parts`.
///
/// Each part is length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
#[must_use]
pub fn digest_uuid(parts: &[&str]) -> Uuid {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.len().to_string().as_bytes());
        hasher.update(b":");
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();
    let mut bytes = [0_u8; 16];
    for (slot, byte) in bytes.iter_mut().zip(digest.iter()) {
        *slot = *byte;
    }
    Uuid::from_bytes(bytes)
}

/// Identifier of one print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterPackId(Uuid);

impl LetterPackId {
    /// Derives the pack identifier for a case and pack label.
    ///
    /// The same case, label and recipient always give the same identifier,
    /// so a repeated run requests the same print job.
    #[must_use]
    pub fn derive(case_id: Option<CaseId>, label: &str, recipient: &LetterRecipient) -> Self {
        let case_ref = case_id.map_or_else(String::new, |id| id.to_string());
        Self(digest_uuid(&[
            &case_ref,
            label,
            &recipient.name,
            &recipient.address.postcode,
        ]))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for LetterPackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addressee of a letter pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRecipient {
    /// Name printed on the envelope.
    pub name: String,
    /// Postal address.
    pub address: Address,
}
