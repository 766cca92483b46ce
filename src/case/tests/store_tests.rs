//! Unit tests for the in-memory case store.

use crate::case::adapters::memory::InMemoryCaseStore;
use crate::case::domain::{CaseRecord, WorkflowState};
use crate::case::ports::{CaseStore, CaseStoreError};
use crate::test_support::{case_id, clock_at, record, sole_data};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryCaseStore {
    InMemoryCaseStore::new()
}

#[rstest]
fn saved_changes_are_loaded_back(store: InMemoryCaseStore) -> eyre::Result<()> {
    store.insert(record(WorkflowState::Submitted, sole_data()))?;
    let mut case = store.load(case_id())?;
    case.state = WorkflowState::AwaitingAos;

    store.save(&case)?;

    assert_eq!(store.load(case_id())?.state, WorkflowState::AwaitingAos);
    assert_eq!(store.len()?, 1);
    Ok(())
}

#[rstest]
fn duplicate_reference_is_rejected(store: InMemoryCaseStore) -> eyre::Result<()> {
    store.insert(record(WorkflowState::Submitted, sole_data()))?;

    let result = store.insert(record(WorkflowState::Holding, sole_data()));

    assert!(matches!(result, Err(CaseStoreError::DuplicateCase(id)) if id == case_id()));
    Ok(())
}

#[rstest]
fn drafts_cannot_be_stored(store: InMemoryCaseStore) {
    let draft = CaseRecord::draft(sole_data(), &clock_at(2023, 12, 20));

    assert!(matches!(store.insert(draft.clone()), Err(CaseStoreError::MissingId)));
    assert!(matches!(store.save(&draft), Err(CaseStoreError::MissingId)));
}

#[rstest]
fn unknown_cases_are_not_found(store: InMemoryCaseStore) {
    let case = record(WorkflowState::Submitted, sole_data());

    assert!(matches!(store.load(case_id()), Err(CaseStoreError::NotFound(_))));
    assert!(matches!(store.save(&case), Err(CaseStoreError::NotFound(_))));
}
