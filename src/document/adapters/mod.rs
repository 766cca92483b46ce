//! Adapter implementations for document ports.

pub mod memory;
