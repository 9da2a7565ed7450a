//! # Hashcost Domain
//!
//! Domain types for the password hashing cost benchmark.
//!
//! This crate contains:
//! - Benchmark configuration (`BenchConfig` and per-algorithm parameters)
//! - Algorithm identities and timing results
//! - Domain error types and Result definitions
//! - Compiled-in default constants
//!
//! ## Architecture
//! - No dependencies on other hashcost crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
