//! Monotonic clock abstraction for testability
//!
//! Timing code reads the clock through the [`Clock`] trait so tests can
//! substitute a [`MockClock`] and make time pass deterministically.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use hashcost_common::time::{Clock, MockClock, SystemClock};
//!
//! // Use system clock in production
//! let clock = SystemClock;
//! let _now = clock.now();
//!
//! // Use mock clock in tests
//! let mock = MockClock::new();
//! let start = mock.now();
//! mock.advance(Duration::from_secs(5));
//! assert_eq!(mock.now().duration_since(start), Duration::from_secs(5));
//! ```

// Allow missing panics docs for the mock clock - a poisoned mutex only happens
// after a panicking test, which already failed
#![allow(clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of monotonic time readings
///
/// Implementations must never go backwards. Wall-clock adjustments (NTP,
/// manual changes) must not affect the readings.
pub trait Clock: Send + Sync {
    /// Get current instant (monotonic time)
    fn now(&self) -> Instant;

    /// Duration elapsed since an earlier reading of this clock
    ///
    /// Saturates to zero if `earlier` is somehow later than `now()`.
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// Real monotonic clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Mock clock for deterministic testing
///
/// Time only moves when [`advance`](MockClock::advance) or
/// [`set_elapsed`](MockClock::set_elapsed) is called. Clones share the same
/// elapsed time, so a clone can be moved into a stub operation that advances
/// the clock the timer is reading.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use hashcost_common::time::{Clock, MockClock};
///
/// let clock = MockClock::new();
/// let handle = clock.clone();
/// let start = clock.now();
///
/// handle.advance(Duration::from_millis(250));
///
/// assert_eq!(clock.now().duration_since(start), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    start: Instant,
    elapsed: Arc<Mutex<Duration>>,
}

impl MockClock {
    /// Create a new mock clock anchored at the current real instant
    pub fn new() -> Self {
        Self { start: Instant::now(), elapsed: Arc::new(Mutex::new(Duration::ZERO)) }
    }

    /// Advance the mock clock by a duration
    pub fn advance(&self, duration: Duration) {
        // Test utility: panic on poisoned mutex to fail tests early
        let mut elapsed = self.elapsed.lock().expect("mutex poisoned");
        *elapsed += duration;
    }

    /// Set the mock clock to an absolute elapsed time
    pub fn set_elapsed(&self, duration: Duration) {
        let mut elapsed = self.elapsed.lock().expect("mutex poisoned");
        *elapsed = duration;
    }

    /// Get how much time has been simulated since the clock was created
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().expect("mutex poisoned")
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::clock.
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let now1 = clock.now();
        let now2 = clock.now();

        assert!(now2 >= now1);
    }

    #[test]
    fn mock_clock_only_moves_when_advanced() {
        let clock = MockClock::new();
        let start = clock.now();

        assert_eq!(clock.elapsed_since(start), Duration::ZERO);

        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.elapsed_since(start), Duration::from_secs(5));
    }

    #[test]
    fn mock_clock_set_elapsed_replaces_previous_value() {
        let clock = MockClock::new();

        clock.set_elapsed(Duration::from_secs(10));
        assert_eq!(clock.elapsed(), Duration::from_secs(10));

        clock.set_elapsed(Duration::from_secs(2));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
    }

    /// Cloned clocks share the same elapsed time.
    #[test]
    fn mock_clock_clones_share_elapsed_time() {
        let clock1 = MockClock::new();
        clock1.advance(Duration::from_secs(10));

        let clock2 = clock1.clone();
        assert_eq!(clock2.elapsed(), Duration::from_secs(10));

        clock1.advance(Duration::from_secs(5));
        assert_eq!(clock2.elapsed(), Duration::from_secs(15));
    }

    #[test]
    fn elapsed_since_saturates_for_future_instant() {
        let clock = MockClock::new();
        clock.advance(Duration::from_secs(3));
        let later = clock.now();
        clock.set_elapsed(Duration::ZERO);

        assert_eq!(clock.elapsed_since(later), Duration::ZERO);
    }
}
