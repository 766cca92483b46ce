//! Unit tests for task composition.

mod error_tests;
