//! Case store port for loading and saving case records.

use crate::case::domain::{CaseId, CaseRecord};
use std::sync::Arc;
use thiserror::Error;

/// Result type for case store operations.
pub type CaseStoreResult<T> = Result<T, CaseStoreError>;

/// Case persistence contract.
///
/// Implementations must allow at most one writer per case at a time; the
/// progression core relies on that guarantee and does not enforce it.
#[cfg_attr(test, mockall::automock)]
pub trait CaseStore: Send + Sync {
    /// Loads a case by reference.
    ///
    /// # Errors
    ///
    /// Returns [`CaseStoreError::NotFound`] when no case has the reference.
    fn load(&self, id: CaseId) -> CaseStoreResult<CaseRecord>;

    /// Persists the full case record, replacing the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`CaseStoreError::MissingId`] for drafts without a reference
    /// and [`CaseStoreError::NotFound`] when the case was never inserted.
    fn save(&self, record: &CaseRecord) -> CaseStoreResult<()>;
}

/// Errors returned by case store implementations.
#[derive(Debug, Clone, Error)]
pub enum CaseStoreError {
    /// The case was not found.
    #[error("case not found: {0}")]
    NotFound(CaseId),

    /// A case with the same reference already exists.
    #[error("duplicate case reference: {0}")]
    DuplicateCase(CaseId),

    /// The record has no reference and cannot be stored.
    #[error("case record has no reference")]
    MissingId,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CaseStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
