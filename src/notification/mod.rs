//! Notification bounded context.
//!
//! Decides which parties hear about a case milestone, by which channel and
//! in which language, and defines the dispatch port those decisions are
//! handed to.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
