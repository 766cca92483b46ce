//! In-memory case store for tests and local runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::case::{
    domain::{CaseId, CaseRecord},
    ports::{CaseStore, CaseStoreError, CaseStoreResult},
};

/// Thread-safe in-memory case store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCaseStore {
    state: Arc<RwLock<HashMap<CaseId, CaseRecord>>>,
}

impl InMemoryCaseStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new case.
    ///
    /// # Errors
    ///
    /// Returns [`CaseStoreError::MissingId`] for drafts and
    /// [`CaseStoreError::DuplicateCase`] when the reference is taken.
    pub fn insert(&self, record: CaseRecord) -> CaseStoreResult<()> {
        let id = record.id().ok_or(CaseStoreError::MissingId)?;
        let mut cases = self
            .state
            .write()
            .map_err(|err| CaseStoreError::persistence(std::io::Error::other(err.to_string())))?;
        if cases.contains_key(&id) {
            return Err(CaseStoreError::DuplicateCase(id));
        }
        cases.insert(id, record);
        Ok(())
    }

    /// Returns the number of stored cases.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when lock acquisition fails.
    pub fn len(&self) -> CaseStoreResult<usize> {
        let cases = self
            .state
            .read()
            .map_err(|err| CaseStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(cases.len())
    }
}

impl CaseStore for InMemoryCaseStore {
    fn load(&self, id: CaseId) -> CaseStoreResult<CaseRecord> {
        let cases = self
            .state
            .read()
            .map_err(|err| CaseStoreError::persistence(std::io::Error::other(err.to_string())))?;
        cases.get(&id).cloned().ok_or(CaseStoreError::NotFound(id))
    }

    fn save(&self, record: &CaseRecord) -> CaseStoreResult<()> {
        let id = record.id().ok_or(CaseStoreError::MissingId)?;
        let mut cases = self
            .state
            .write()
            .map_err(|err| CaseStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let stored = cases.get_mut(&id).ok_or(CaseStoreError::NotFound(id))?;
        *stored = record.clone();
        Ok(())
    }
}
