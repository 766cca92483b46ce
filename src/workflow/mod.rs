//! Case events and the pipelines that carry them out.
//!
//! [`CaseProgressionService`] loads a case, runs the pipeline selected by a
//! [`CaseEvent`] and saves the outcome. Pipelines are built per call by
//! [`CasePipelines`] from the injected renderer, letter and notification
//! collaborators.

mod event;
mod pipelines;
pub mod services;
pub mod tasks;

pub use event::CaseEvent;
pub use pipelines::CasePipelines;
pub use services::{CaseProgressionError, CaseProgressionResult, CaseProgressionService};

#[cfg(test)]
mod tests;
