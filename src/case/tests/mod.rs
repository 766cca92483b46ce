//! Unit tests for the case module.

mod store_tests;
