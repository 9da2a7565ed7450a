//! Domain types and models

pub mod algorithm;
pub mod timing;

// Re-export for convenience
pub use algorithm::AlgorithmKind;
pub use timing::{BenchmarkRun, SkippedAlgorithm, TimingResult};
