// ABOUTME: Wall-clock abstraction used to decide what "today" is
// ABOUTME: SystemClock reads local time; FixedClock is settable for tests and replays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current local date and time
pub trait Clock: Send + Sync {
    /// Current local date-time
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the operating system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a settable instant
///
/// Stores seconds since the epoch in an atomic so it can be shared behind
/// an `Arc` and moved between tests without locking.
#[derive(Debug)]
pub struct FixedClock {
    epoch_seconds: AtomicI64,
}

impl FixedClock {
    /// Create a clock frozen at `now`
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            epoch_seconds: AtomicI64::new(now.and_utc().timestamp()),
        }
    }

    /// Move the clock to `now`
    pub fn set(&self, now: NaiveDateTime) {
        self.epoch_seconds
            .store(now.and_utc().timestamp(), Ordering::SeqCst);
    }

    /// Move the clock forward by `delta`
    pub fn advance(&self, delta: Duration) {
        self.epoch_seconds
            .fetch_add(delta.num_seconds(), Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        let seconds = self.epoch_seconds.load(Ordering::SeqCst);
        DateTime::from_timestamp(seconds, 0)
            .map(|instant| instant.naive_utc())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_set_and_advance() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::minutes(45));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

        clock.set(start);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }
}
