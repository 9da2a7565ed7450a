//! Benchmark configuration
//!
//! A `BenchConfig` is built once at process start and passed by reference to
//! everything that needs it. Nothing mutates it afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARGON2_MEMORY_KIB, DEFAULT_ARGON2_PARALLELISM, DEFAULT_ARGON2_TIME_COST,
    DEFAULT_BCRYPT_COST, DEFAULT_REPETITIONS, DEFAULT_SCRYPT_N, DEFAULT_SCRYPT_P,
    DEFAULT_SCRYPT_R, DEFAULT_SECRET,
};
use crate::types::AlgorithmKind;

/// Benchmark configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(skip_serializing, default = "default_secret")]
    pub secret: Vec<u8>,
    pub repetitions: u32,
    /// Run and report order
    pub algorithms: Vec<AlgorithmKind>,
    pub bcrypt: BcryptParams,
    pub scrypt: ScryptParams,
    pub argon2: Argon2Params,
}

/// bcrypt tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BcryptParams {
    /// log2 of the number of rounds
    pub cost: u32,
}

/// scrypt tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParams {
    /// CPU/memory cost, a power of two
    pub n: u64,
    /// Block size
    pub r: u32,
    /// Parallelization
    pub p: u32,
}

/// Argon2id tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2Params {
    /// Number of passes over memory
    pub time_cost: u32,
    /// Memory in KiB; must be at least `8 * parallelism`
    pub memory_cost_kib: u32,
    /// Number of lanes
    pub parallelism: u32,
}

impl BenchConfig {
    /// Restrict the run to the given algorithms, keeping their given order.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = AlgorithmKind>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Whether `kind` is part of this run.
    pub fn is_enabled(&self, kind: AlgorithmKind) -> bool {
        self.algorithms.contains(&kind)
    }
}

fn default_secret() -> Vec<u8> {
    DEFAULT_SECRET.to_vec()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            repetitions: DEFAULT_REPETITIONS,
            algorithms: AlgorithmKind::ALL.to_vec(),
            bcrypt: BcryptParams::default(),
            scrypt: ScryptParams::default(),
            argon2: Argon2Params::default(),
        }
    }
}

impl Default for BcryptParams {
    fn default() -> Self {
        Self { cost: DEFAULT_BCRYPT_COST }
    }
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self { n: DEFAULT_SCRYPT_N, r: DEFAULT_SCRYPT_R, p: DEFAULT_SCRYPT_P }
    }
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            time_cost: DEFAULT_ARGON2_TIME_COST,
            memory_cost_kib: DEFAULT_ARGON2_MEMORY_KIB,
            parallelism: DEFAULT_ARGON2_PARALLELISM,
        }
    }
}

impl fmt::Debug for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchConfig")
            .field("secret", &format_args!("[REDACTED; {} bytes]", self.secret.len()))
            .field("repetitions", &self.repetitions)
            .field("algorithms", &self.algorithms)
            .field("bcrypt", &self.bcrypt)
            .field("scrypt", &self.scrypt)
            .field("argon2", &self.argon2)
            .finish()
    }
}
