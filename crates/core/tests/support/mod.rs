//! Shared test helpers for `hashcost-core` integration tests.
//!
//! Stub operations, algorithms and salt sources that count what the harness
//! does to them, so tests can assert on invocation and salt-draw counts.

#![allow(dead_code)]

pub mod salts;
pub mod stubs;

pub use salts::{CountingSaltSource, FailingSaltSource, RecordingSaltSource};
pub use stubs::{ticking_operation, CountingAlgorithm, CountingOperation};
