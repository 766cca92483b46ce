//! Step definitions for case progression behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
