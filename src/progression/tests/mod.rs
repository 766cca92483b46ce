//! Unit tests for the progression module.

mod due_date_tests;
