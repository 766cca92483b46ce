//! Unit tests for the workflow module.

mod pipeline_tests;
