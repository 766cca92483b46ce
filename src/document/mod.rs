//! Document bounded context.
//!
//! Case documents are described by typed [`domain::DocumentContent`] and
//! only flattened to template values inside a renderer. Printed packs go out
//! through the [`ports::LetterDispatcher`] port.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
