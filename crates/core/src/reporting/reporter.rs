//! Plain-text benchmark report
//!
//! Layout (values illustrative):
//!
//! ```text
//! Password hashing timing demo
//!
//! Password: b'correct horse battery staple'
//! Repetitions per algorithm: 100
//!
//! Parameters used:
//! - bcrypt:  cost=12
//! - scrypt:  N=16384, r=8, p=1
//! - Argon2id: time_cost=2, memory_cost=64000 KiB, parallelism=1
//!
//! Average time per hash:
//!
//! SHA-256         0.00 ms per hash (over 100 runs)
//! bcrypt        245.31 ms per hash (over 100 runs)
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use hashcost_domain::{BenchConfig, SkippedAlgorithm, TimingResult};

const TITLE: &str = "Password hashing timing demo";

/// Writes the configuration header, one row per result, and skip notices
///
/// The header's parameter block is whatever the caller hands to
/// [`with_parameters`](Self::with_parameters), as `(name, summary)` pairs in
/// report order. Algorithms without tunables are simply not in that list.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    parameters: Vec<(String, String)>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, parameters: Vec::new() }
    }

    /// Parameter lines for the "Parameters used" block.
    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = (String, String)>) -> Self {
        self.parameters = parameters.into_iter().collect();
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the configuration once, then one row per result in the order
    /// given. Results are never reordered.
    ///
    /// # Errors
    /// Propagates write failures from the underlying sink.
    pub fn report(&mut self, results: &[TimingResult], config: &BenchConfig) -> io::Result<()> {
        self.write_header(config)?;
        for result in results {
            self.write_row(result)?;
        }
        Ok(())
    }

    /// Everything up to and including the "Average time per hash" heading.
    ///
    /// Flushed, so it is visible while the first algorithm is still timing.
    ///
    /// # Errors
    /// Propagates write failures from the underlying sink.
    pub fn write_header(&mut self, config: &BenchConfig) -> io::Result<()> {
        writeln!(self.out, "{TITLE}")?;
        writeln!(self.out)?;
        writeln!(self.out, "Password: {}", byte_string_literal(&config.secret))?;
        writeln!(self.out, "Repetitions per algorithm: {}", config.repetitions)?;
        writeln!(self.out)?;

        writeln!(self.out, "Parameters used:")?;
        for (name, parameters) in &self.parameters {
            writeln!(self.out, "{}", parameter_line(name, parameters))?;
        }
        writeln!(self.out)?;

        writeln!(self.out, "Average time per hash:")?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// One result row, flushed immediately.
    ///
    /// # Errors
    /// Propagates write failures from the underlying sink.
    pub fn write_row(&mut self, result: &TimingResult) -> io::Result<()> {
        writeln!(self.out, "{}", format_row(result))?;
        self.out.flush()
    }

    /// One line per skipped algorithm, naming it and the cause.
    ///
    /// # Errors
    /// Propagates write failures from the underlying sink.
    pub fn report_skipped(&mut self, skipped: &[SkippedAlgorithm]) -> io::Result<()> {
        if skipped.is_empty() {
            return Ok(());
        }
        writeln!(self.out)?;
        for entry in skipped {
            writeln!(self.out, "{}", skip_notice(entry))?;
        }
        self.out.flush()
    }
}

/// `name` left-aligned to 10, mean right-aligned to 8 with 2 decimals.
pub fn format_row(result: &TimingResult) -> String {
    format!(
        "{:<10}  {:>8.2} ms per hash (over {} runs)",
        result.name, result.mean_latency_ms, result.repetitions
    )
}

pub fn skip_notice(entry: &SkippedAlgorithm) -> String {
    format!("Skipped {}: {}", entry.name, entry.reason)
}

/// `- bcrypt:  cost=12`; the colon is padded so short names line up.
fn parameter_line(name: &str, parameters: &str) -> String {
    format!("- {:<8} {}", format!("{name}:"), parameters)
}

/// Render bytes as a `b'...'` literal, escaping anything non-printable.
pub fn byte_string_literal(bytes: &[u8]) -> String {
    let mut rendered = String::with_capacity(bytes.len() + 3);
    rendered.push_str("b'");
    for &byte in bytes {
        match byte {
            b'\\' => rendered.push_str("\\\\"),
            b'\'' => rendered.push_str("\\'"),
            b'\n' => rendered.push_str("\\n"),
            b'\r' => rendered.push_str("\\r"),
            b'\t' => rendered.push_str("\\t"),
            0x20..=0x7e => rendered.push(char::from(byte)),
            _ => {
                let _ = write!(rendered, "\\x{byte:02x}");
            }
        }
    }
    rendered.push('\'');
    rendered
}
