//! Benchmark orchestration
//!
//! Control flow: configuration → factories → operations → timer → reporter.

pub mod service;

pub use service::BenchmarkDriver;
