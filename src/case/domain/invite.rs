//! Access codes that let the other party link themselves to the case.

use super::{ApplicantRole, CaseDomainError, CaseId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Eight character code printed on the notice of proceedings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessCode(String);

impl AccessCode {
    /// Characters an access code may contain. Visually ambiguous letters and
    /// digits are excluded.
    pub const ALPHABET: &'static [u8] = b"ABCDEFGHJKLMNPRSTVWXYZ23456789";

    /// Number of characters in an access code.
    pub const LENGTH: usize = 8;

    /// Creates a validated access code.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDomainError::InvalidAccessCode`] when the value has the
    /// wrong length or contains characters outside [`Self::ALPHABET`].
    pub fn new(value: impl Into<String>) -> Result<Self, CaseDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();
        let is_valid = normalized.len() == Self::LENGTH
            && normalized.bytes().all(|byte| Self::ALPHABET.contains(&byte));
        if !is_valid {
            return Err(CaseDomainError::InvalidAccessCode(raw));
        }
        Ok(Self(normalized))
    }

    /// Derives the access code for a party from the case reference and the
    /// time the code is issued.
    ///
    /// The same inputs always give the same code.
    #[must_use]
    pub fn derive(case_id: CaseId, role: ApplicantRole, issued_at: DateTime<Utc>) -> Self {
        let digest = Sha256::new()
            .chain_update(case_id.to_string().as_bytes())
            .chain_update(role.as_str().as_bytes())
            .chain_update(issued_at.to_rfc3339().as_bytes())
            .finalize();
        let code = digest
            .iter()
            .take(Self::LENGTH)
            .filter_map(|byte| {
                usize::from(*byte)
                    .checked_rem(Self::ALPHABET.len())
                    .and_then(|index| Self::ALPHABET.get(index).copied())
                    .map(char::from)
            })
            .collect();
        Self(code)
    }

    /// Returns the code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccessCode {
    type Error = CaseDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccessCode> for String {
    fn from(value: AccessCode) -> Self {
        value.0
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Invitation for applicant 2 to link to the case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInvite {
    /// Email the invitation is sent to.
    pub applicant2_invite_email: Option<String>,
    /// Access code, present until applicant 2 links.
    pub access_code: Option<AccessCode>,
    /// Identity of applicant 2 once linked.
    pub applicant2_user_id: Option<String>,
}

impl CaseInvite {
    /// Returns `true` once applicant 2 has linked to the case.
    #[must_use]
    pub const fn is_linked(&self) -> bool {
        self.applicant2_user_id.is_some()
    }
}
