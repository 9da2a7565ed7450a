//! hashcost - password hashing timing demo
//!
//! Times SHA-256, bcrypt, scrypt and Argon2id on one secret and prints the
//! mean latency of each. Takes no arguments; `HASHCOST_*` environment
//! variables override the compiled-in parameters and `RUST_LOG` controls
//! diagnostics on stderr.
//!
//! Exits non-zero only when the configuration cannot be loaded, the run
//! aborts, or every algorithm was skipped.

#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use hashcost_core::{load_from_env, BenchmarkDriver};
use hashcost_domain::BenchmarkRun;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(run) if run.all_failed() => {
            error!(skipped = run.skipped.len(), "Every algorithm failed to run");
            ExitCode::FAILURE
        }
        Ok(run) => {
            info!(measured = run.results.len(), skipped = run.skipped.len(), "Benchmark finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "Benchmark aborted");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<BenchmarkRun> {
    let config = load_from_env().context("failed to load configuration")?;
    info!(
        repetitions = config.repetitions,
        algorithms = ?config.algorithms,
        "Starting benchmark"
    );

    let stdout = io::stdout();
    BenchmarkDriver::new(config).run_and_report(stdout.lock()).context("benchmark run failed")
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}
