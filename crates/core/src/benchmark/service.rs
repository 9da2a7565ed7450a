//! Benchmark driver - composes factories, timer and reporter

use std::io::Write;
use std::sync::Arc;

use hashcost_common::time::{Clock, SystemClock};
use hashcost_domain::{
    BenchConfig, BenchError, BenchmarkRun, Result, SkippedAlgorithm, TimingResult,
};
use tracing::{info, warn};

use crate::hashing::{algorithms_from_config, HashAlgorithm, OsSaltSource, SaltSource};
use crate::reporting::Reporter;
use crate::timing::Timer;

/// Runs every configured algorithm through setup and timing, in order
///
/// A recoverable failure (bad tunable, failed hash, entropy error) skips
/// that algorithm only. Anything else aborts the run.
pub struct BenchmarkDriver<C: Clock = SystemClock> {
    config: BenchConfig,
    algorithms: Vec<Box<dyn HashAlgorithm>>,
    salts: Arc<dyn SaltSource>,
    timer: Timer<C>,
}

impl BenchmarkDriver<SystemClock> {
    /// Driver for the algorithms enabled in `config`, using OS randomness and
    /// the real monotonic clock.
    pub fn new(config: BenchConfig) -> Self {
        let algorithms = algorithms_from_config(&config);
        Self { config, algorithms, salts: Arc::new(OsSaltSource), timer: Timer::new() }
    }
}

impl<C: Clock> BenchmarkDriver<C> {
    /// Replace the algorithm list (e.g. with stubs in tests).
    pub fn with_algorithms(mut self, algorithms: Vec<Box<dyn HashAlgorithm>>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Draw salt material from a different source.
    pub fn with_salt_source(mut self, salts: Arc<dyn SaltSource>) -> Self {
        self.salts = salts;
        self
    }

    /// Time with a different clock.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> BenchmarkDriver<C2> {
        BenchmarkDriver {
            config: self.config,
            algorithms: self.algorithms,
            salts: self.salts,
            timer: Timer::with_clock(clock),
        }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// `(name, summary)` for every algorithm that has tunables, in run order.
    pub fn parameter_lines(&self) -> Vec<(String, String)> {
        self.algorithms
            .iter()
            .filter_map(|a| a.parameters().map(|p| (a.name().to_string(), p)))
            .collect()
    }

    /// Set up and time each algorithm in order.
    ///
    /// # Errors
    /// Only non-recoverable errors, e.g. `BenchError::InvalidArgument` when
    /// the configured repetition count is zero.
    pub fn run(&self) -> Result<BenchmarkRun> {
        self.run_with(|_| Ok(()))
    }

    /// Header first, then each row as soon as its algorithm finishes, then
    /// any skip notices.
    ///
    /// # Errors
    /// Non-recoverable run errors, or `BenchError::Output` if writing fails.
    /// A zero repetition count is rejected before anything is written.
    pub fn run_and_report<W: Write>(&self, out: W) -> Result<BenchmarkRun> {
        self.check_repetitions()?;

        let mut reporter = Reporter::new(out).with_parameters(self.parameter_lines());
        reporter.write_header(&self.config)?;
        let run = self.run_with(|result| Ok(reporter.write_row(result)?))?;
        reporter.report_skipped(&run.skipped)?;

        Ok(run)
    }

    fn run_with<F>(&self, mut on_result: F) -> Result<BenchmarkRun>
    where
        F: FnMut(&TimingResult) -> Result<()>,
    {
        self.check_repetitions()?;
        let mut run = BenchmarkRun::default();

        for algorithm in &self.algorithms {
            match self.run_one(algorithm.as_ref()) {
                Ok(result) => {
                    info!(
                        algorithm = %result.name,
                        mean_ms = result.mean_latency_ms,
                        repetitions = result.repetitions,
                        "Measurement complete"
                    );
                    on_result(&result)?;
                    run.results.push(result);
                }
                Err(err) if err.is_recoverable() => {
                    warn!(algorithm = algorithm.name(), error = %err, "Skipping algorithm");
                    run.skipped.push(SkippedAlgorithm {
                        name: algorithm.name().to_string(),
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(run)
    }

    fn check_repetitions(&self) -> Result<()> {
        if self.config.repetitions == 0 {
            return Err(BenchError::InvalidArgument(
                "repetitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn run_one(&self, algorithm: &dyn HashAlgorithm) -> Result<TimingResult> {
        // Setup (salt, parameter checks) completes before the clock starts
        let mut operation = algorithm.prepare(&self.config.secret, self.salts.as_ref())?;
        self.timer.measure(&mut operation, self.config.repetitions)
    }
}

impl<C: Clock> std::fmt::Debug for BenchmarkDriver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.algorithms.iter().map(|a| a.name()).collect();
        f.debug_struct("BenchmarkDriver")
            .field("config", &self.config)
            .field("algorithms", &names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use hashcost_common::time::MockClock;
    use hashcost_domain::InvocationError;

    use super::*;
    use crate::hashing::HashOperation;

    struct Stub {
        name: &'static str,
        fail_setup: bool,
    }

    impl HashAlgorithm for Stub {
        fn name(&self) -> &str {
            self.name
        }

        fn prepare(&self, _secret: &[u8], _salts: &dyn SaltSource) -> Result<HashOperation> {
            if self.fail_setup {
                return Err(BenchError::configuration(self.name, "cost", "rejected"));
            }
            Ok(HashOperation::new(self.name, || Ok(())))
        }
    }

    fn stub(name: &'static str, fail_setup: bool) -> Box<dyn HashAlgorithm> {
        Box::new(Stub { name, fail_setup })
    }

    #[test]
    fn failed_setup_skips_only_that_algorithm() {
        let config = BenchConfig { repetitions: 2, ..BenchConfig::default() };
        let driver = BenchmarkDriver::new(config)
            .with_algorithms(vec![stub("a", false), stub("b", true), stub("c", false)])
            .with_clock(MockClock::new());

        let run = driver.run().unwrap();

        let names: Vec<_> = run.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(run.skipped.len(), 1);
        assert_eq!(run.skipped[0].name, "b");
        assert!(run.skipped[0].reason.contains("invalid cost"));
    }

    #[test]
    fn zero_repetitions_aborts_the_run() {
        let config = BenchConfig { repetitions: 0, ..BenchConfig::default() };
        let driver = BenchmarkDriver::new(config).with_algorithms(vec![stub("a", false)]);

        assert!(matches!(driver.run(), Err(BenchError::InvalidArgument(_))));
    }

    #[test]
    fn failing_operation_is_skipped() {
        struct Broken;
        impl HashAlgorithm for Broken {
            fn name(&self) -> &str {
                "broken"
            }
            fn prepare(&self, _: &[u8], _: &dyn SaltSource) -> Result<HashOperation> {
                Ok(HashOperation::new("broken", || Err(InvocationError::new("allocation failed"))))
            }
        }

        let config = BenchConfig { repetitions: 3, ..BenchConfig::default() };
        let algorithms = vec![Box::new(Broken) as Box<dyn HashAlgorithm>, stub("ok", false)];
        let driver = BenchmarkDriver::new(config).with_algorithms(algorithms);

        let run = driver.run().unwrap();

        assert_eq!(run.results.len(), 1);
        assert_eq!(run.skipped[0].reason, "broken failed on iteration 1: allocation failed");
    }

    #[test]
    fn mock_clock_drives_reported_mean() {
        let clock = MockClock::new();
        let ticking = clock.clone();

        struct Ticking(MockClock);
        impl HashAlgorithm for Ticking {
            fn name(&self) -> &str {
                "ticking"
            }
            fn prepare(&self, _: &[u8], _: &dyn SaltSource) -> Result<HashOperation> {
                let clock = self.0.clone();
                Ok(HashOperation::new("ticking", move || {
                    clock.advance(Duration::from_millis(7));
                    Ok(())
                }))
            }
        }

        let config = BenchConfig { repetitions: 4, ..BenchConfig::default() };
        let driver = BenchmarkDriver::new(config)
            .with_algorithms(vec![Box::new(Ticking(ticking)) as Box<dyn HashAlgorithm>])
            .with_clock(clock);

        let run = driver.run().unwrap();

        assert!((run.results[0].mean_latency_ms - 7.0).abs() < 1e-9);
    }

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl SharedSink {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Records what the sink held when its setup ran.
    struct Observing {
        name: &'static str,
        sink: SharedSink,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl HashAlgorithm for Observing {
        fn name(&self) -> &str {
            self.name
        }

        fn parameters(&self) -> Option<String> {
            Some(format!("tag={}", self.name))
        }

        fn prepare(&self, _: &[u8], _: &dyn SaltSource) -> Result<HashOperation> {
            self.seen.lock().unwrap().push(self.sink.text());
            Ok(HashOperation::new(self.name, || Ok(())))
        }
    }

    #[test]
    fn header_and_earlier_rows_are_written_before_each_setup() {
        let sink = SharedSink::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let observing = |name| {
            Box::new(Observing { name, sink: sink.clone(), seen: Arc::clone(&seen) })
                as Box<dyn HashAlgorithm>
        };

        let config = BenchConfig { repetitions: 2, ..BenchConfig::default() };
        let driver = BenchmarkDriver::new(config)
            .with_algorithms(vec![observing("first"), stub("plain", false), observing("second")])
            .with_clock(MockClock::new());

        driver.run_and_report(sink.clone()).unwrap();

        let seen = seen.lock().unwrap();
        assert!(seen[0].ends_with("Average time per hash:\n\n"));
        assert!(seen[0].contains("- first:   tag=first\n- second:  tag=second\n"));
        assert!(!seen[0].contains("ms per hash"));
        assert!(seen[1].contains("\nfirst "));
        assert!(seen[1].contains("\nplain "));
        assert!(!seen[1].contains("\nsecond "));
        assert!(sink.text().ends_with("(over 2 runs)\n"));
    }

    #[test]
    fn zero_repetitions_writes_nothing() {
        let sink = SharedSink::default();
        let config = BenchConfig { repetitions: 0, ..BenchConfig::default() };
        let driver = BenchmarkDriver::new(config).with_algorithms(vec![stub("a", false)]);

        let err = driver.run_and_report(sink.clone()).unwrap_err();

        assert!(matches!(err, BenchError::InvalidArgument(_)));
        assert!(sink.text().is_empty());
    }
}
