//! Time source for the ticket store
//!
//! Entry and exit timestamps are read through [`Clock`] so the store can be
//! driven by a controllable clock in tests.

#[cfg(test)]
use std::cell::Cell;

#[cfg(test)]
use chrono::Duration;
use chrono::{DateTime, Utc};

/// Source of the current time
pub trait Clock {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    time: Cell<DateTime<Utc>>,
}

#[cfg(test)]
impl ManualClock {
    /// Create a clock stopped at `time`
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    /// Jump to `time` (may move backwards)
    pub fn set(&self, time: DateTime<Utc>) {
        self.time.set(time);
    }

    /// Move forward by `by`
    pub fn advance(&self, by: Duration) {
        self.time.set(self.time.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.time.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_clock_advances() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::minutes(30));
        assert_eq!(clock.now(), start + Duration::minutes(30));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }
}
