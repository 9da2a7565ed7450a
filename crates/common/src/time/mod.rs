//! Time utilities and abstractions
//!
//! This module provides the time handling pieces the timing harness needs:
//! - **[`clock`]**: Monotonic clock trait with real and mock implementations
//! - **[`millis`]**: Fractional-millisecond conversions for latency reporting
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use hashcost_common::time::{mean_millis, Clock, MockClock};
//!
//! let clock = MockClock::new();
//! let start = clock.now();
//! clock.advance(Duration::from_millis(30));
//!
//! let mean = mean_millis(clock.now().duration_since(start), 3);
//! assert!((mean - 10.0).abs() < 1e-9);
//! ```

pub mod clock;
pub mod millis;

// Re-export commonly used items
pub use clock::{Clock, MockClock, SystemClock};
pub use millis::{as_millis_f64, mean_millis};
