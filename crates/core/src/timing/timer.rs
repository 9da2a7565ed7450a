//! Mean-latency timer
//!
//! Reads a monotonic [`Clock`] once before and once after a tight,
//! single-threaded loop of invocations. Nothing else happens inside the loop:
//! no per-iteration clock reads, no logging, no allocation.

use hashcost_common::time::{mean_millis, Clock, SystemClock};
use hashcost_domain::{BenchError, Result, TimingResult};
use tracing::debug;

use crate::hashing::HashOperation;

/// Times repeated invocations of a [`HashOperation`]
#[derive(Debug, Clone, Default)]
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
}

impl Timer<SystemClock> {
    /// Timer backed by the real monotonic clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Timer<C> {
    /// Timer reading an explicit clock (used by tests)
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Invoke `operation` exactly `repetitions` times and report the mean.
    ///
    /// # Errors
    /// - `BenchError::InvalidArgument` if `repetitions` is zero; the operation
    ///   is not invoked at all.
    /// - `BenchError::OperationFailed` tagged with the 1-based iteration that
    ///   failed. The loop stops there; completed iterations are not averaged.
    pub fn measure(
        &self,
        operation: &mut HashOperation,
        repetitions: u32,
    ) -> Result<TimingResult> {
        if repetitions == 0 {
            return Err(BenchError::InvalidArgument(format!(
                "repetitions must be at least 1 (timing {})",
                operation.name()
            )));
        }

        debug!(algorithm = operation.name(), repetitions, "Timing started");

        let start = self.clock.now();
        for iteration in 1..=repetitions {
            if let Err(err) = operation.invoke() {
                return Err(BenchError::OperationFailed {
                    algorithm: operation.name().to_string(),
                    iteration,
                    reason: err.to_string(),
                });
            }
        }
        let total = self.clock.elapsed_since(start);

        debug!(algorithm = operation.name(), repetitions, elapsed = ?total, "Timing finished");

        Ok(TimingResult {
            name: operation.name().to_string(),
            repetitions,
            mean_latency_ms: mean_millis(total, repetitions),
            total,
        })
    }
}
