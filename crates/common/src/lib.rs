//! Modular common utilities shared across hashcost crates.
//!
//! # Modules
//!
//! - [`time`]: monotonic clock abstraction (real and mock) and millisecond
//!   conversions used by the timing harness
//! - [`testing`]: assertion helpers for test suites (feature `test-utils`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
pub use time::{as_millis_f64, mean_millis, Clock, MockClock, SystemClock};
