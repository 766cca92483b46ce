//! Application services for case progression.

mod progression;

pub use progression::{CaseProgressionError, CaseProgressionResult, CaseProgressionService};
