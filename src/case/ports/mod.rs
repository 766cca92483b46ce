//! Port contracts for case persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by progression
//! services.

pub mod store;

pub use store::{CaseStore, CaseStoreError, CaseStoreResult};
