//! Fractional millisecond conversions
//!
//! Latencies are reported as `f64` milliseconds. `Duration::as_millis`
//! truncates to whole milliseconds, which loses everything interesting about
//! a sub-millisecond digest, so conversions go through `as_secs_f64`.

use std::time::Duration;

/// Convert a duration to fractional milliseconds
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use hashcost_common::time::as_millis_f64;
///
/// assert_eq!(as_millis_f64(Duration::from_micros(1500)), 1.5);
/// ```
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Mean latency in milliseconds of `count` operations that took `total`
///
/// Returns `0.0` when `count` is zero rather than dividing by zero; callers
/// that consider a zero count an error must check it themselves.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use hashcost_common::time::mean_millis;
///
/// assert_eq!(mean_millis(Duration::from_millis(500), 100), 5.0);
/// assert_eq!(mean_millis(Duration::from_millis(500), 0), 0.0);
/// ```
pub fn mean_millis(total: Duration, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    as_millis_f64(total) / f64::from(count)
}
