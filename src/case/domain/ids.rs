//! Identifier types for the case domain.

use super::CaseDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sixteen digit reference assigned to a case by the case-data platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(u64);

impl CaseId {
    /// Largest reference that fits in sixteen digits.
    const MAX_VALUE: u64 = 9_999_999_999_999_999;

    /// Creates a validated case reference.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDomainError::InvalidCaseId`] when the value is zero or
    /// has more than sixteen digits.
    pub const fn new(value: u64) -> Result<Self, CaseDomainError> {
        if value == 0 || value > Self::MAX_VALUE {
            return Err(CaseDomainError::InvalidCaseId(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the reference grouped in blocks of four, as printed on
    /// correspondence (`1234-5678-9012-3456`).
    #[must_use]
    pub fn formatted(self) -> String {
        let digits: Vec<char> = self.to_string().chars().collect();
        digits
            .chunks(4)
            .map(|block| block.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl TryFrom<&str> for CaseId {
    type Error = CaseDomainError;

    /// Parses a reference, accepting the hyphenated correspondence form.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits: String = value
            .trim()
            .chars()
            .filter(|ch| *ch != '-' && *ch != ' ')
            .collect();
        if digits.len() != 16 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(CaseDomainError::InvalidCaseReference(value.to_owned()));
        }
        let parsed = digits
            .parse::<u64>()
            .map_err(|_| CaseDomainError::InvalidCaseReference(value.to_owned()))?;
        Self::new(parsed)
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016}", self.0)
    }
}

/// Identifier of a rendered document held by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Creates a document identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for DocumentId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
