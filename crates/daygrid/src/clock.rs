//! Clock injection for time-dependent schedule queries.
//!
//! The schedule never reads ambient global time. Every query that depends on
//! "now" takes a [`Clock`], so callers control the time source and tests can
//! pin it.

use chrono::{DateTime, Utc};

/// A source of the current instant.
pub trait Clock {
    /// Current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for tests and deterministic replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
