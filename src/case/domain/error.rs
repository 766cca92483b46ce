//! Error types for case domain validation and parsing.

use super::CaseId;
use thiserror::Error;

/// Errors returned while constructing case domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaseDomainError {
    /// The case reference is zero or longer than sixteen digits.
    #[error("invalid case reference {0}, expected a positive number of at most 16 digits")]
    InvalidCaseId(u64),

    /// The case reference text is not a sixteen digit number.
    #[error("invalid case reference '{0}'")]
    InvalidCaseReference(String),

    /// The access code does not use the expected alphabet or length.
    #[error("invalid access code '{0}'")]
    InvalidAccessCode(String),

    /// The case already carries an identifier.
    #[error("case already has reference {0}")]
    CaseIdAlreadyAssigned(CaseId),
}

/// Error returned while parsing workflow states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workflow state: {0}")]
pub struct ParseWorkflowStateError(pub String);
