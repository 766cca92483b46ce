//! Adapter implementations for case ports.

pub mod memory;
