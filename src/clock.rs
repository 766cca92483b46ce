//! Clock implementations for deterministic pipeline runs.
//!
//! Production callers inject [`mockable::DefaultClock`]; tests and replays
//! inject a [`FixedClock`] so every task sees the same instant.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Creates a clock pinned to midnight UTC on `date`.
    #[must_use]
    pub fn at_start_of(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
