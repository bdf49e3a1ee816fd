// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use scribe_core::application::ports::time::Clock;

/// Deterministic timestamp shared by all test doubles.
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
}

#[derive(Clone, Debug, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
