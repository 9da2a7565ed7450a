//! Latency measurement
//!
//! The timer runs on the calling thread with no async suspension and no I/O
//! between its two clock readings. A harness timeout has to wrap the whole
//! `measure` call, not individual iterations.

pub mod timer;

pub use timer::Timer;
