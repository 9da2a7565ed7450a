//! # Hashcost Core
//!
//! Benchmark logic for the password hashing cost comparison.
//!
//! This crate contains:
//! - Hash algorithm factories behind the [`HashAlgorithm`] port
//! - The mean-latency [`Timer`]
//! - The plain-text [`Reporter`]
//! - The [`BenchmarkDriver`] that composes them
//! - Environment configuration loading
//!
//! ## Architecture Principles
//! - Depends on `hashcost-domain` for types and `hashcost-common` for clocks
//! - Randomness and time are injected through traits
//! - No process-level concerns (logging setup, exit codes)

#![forbid(unsafe_code)]

pub mod benchmark;
pub mod config;
pub mod hashing;
pub mod reporting;
pub mod timing;

pub use benchmark::BenchmarkDriver;
pub use config::load_from_env;
pub use hashing::{
    algorithm_for, algorithms_from_config, HashAlgorithm, HashOperation, OsSaltSource, SaltSource,
};
pub use reporting::Reporter;
pub use timing::Timer;
