//! Decree: case progression core for divorce and dissolution cases.
//!
//! This crate decides how a case moves through its legal lifecycle: which
//! state it enters after each event, when its next deadline falls, and who
//! must be told about each milestone.
//!
//! # Architecture
//!
//! Decree follows hexagonal architecture principles:
//!
//! - **Domain**: Pure progression rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage, rendering and delivery
//! - **Adapters**: In-memory implementations of ports for tests and local runs
//!
//! # Modules
//!
//! - [`case`]: Case record, its data and the case store
//! - [`pipeline`]: Ordered task execution with short-circuit on failure
//! - [`progression`]: Workflow state and due-date decisions
//! - [`notification`]: Notification eligibility and email delivery
//! - [`document`]: Document content, rendering and letter packs
//! - [`workflow`]: Case events, their pipelines and the progression service
//! - [`config`]: Offsets and feature flags shared by every run
//! - [`clock`]: Deterministic clock for replays and tests

pub mod case;
pub mod clock;
pub mod config;
pub mod document;
pub mod notification;
pub mod pipeline;
pub mod progression;
pub mod workflow;

#[cfg(test)]
mod test_support;
