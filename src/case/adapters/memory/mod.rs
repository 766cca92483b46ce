//! In-memory adapters for the case domain.

mod store;

pub use store::InMemoryCaseStore;
