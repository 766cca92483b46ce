//! Case progression decisions: workflow transitions and deadlines.
//!
//! Both halves are pure. They read case data, configuration and a
//! caller-supplied date, and never perform I/O or read a clock.

pub mod due_date;
pub mod transition;

pub use due_date::{DueDateError, DueDateResult, FinalOrderDates};
pub use transition::{SECOND_IN_TIME_THRESHOLD_DAYS, SubmissionOrder, Transition};

#[cfg(test)]
mod tests;
