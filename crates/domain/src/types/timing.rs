//! Timing results produced by the timer and consumed by the reporter

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Mean latency of one algorithm over a fixed number of repetitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    pub name: String,
    /// Always at least one
    pub repetitions: u32,
    /// Never negative
    pub mean_latency_ms: f64,
    /// Wall time of the whole timed loop
    pub total: Duration,
}

/// An algorithm that produced no row, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedAlgorithm {
    pub name: String,
    pub reason: String,
}

/// Everything one benchmark run produced, in algorithm order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    pub results: Vec<TimingResult>,
    pub skipped: Vec<SkippedAlgorithm>,
}

impl BenchmarkRun {
    /// True when algorithms were attempted and none produced a result.
    pub fn all_failed(&self) -> bool {
        self.results.is_empty() && !self.skipped.is_empty()
    }

    /// Look up a result by algorithm name.
    pub fn result(&self, name: &str) -> Option<&TimingResult> {
        self.results.iter().find(|r| r.name == name)
    }
}
