//! Configuration loader
//!
//! Starts from the compiled-in defaults and applies any overrides found in
//! the environment. Every variable is optional.
//!
//! ## Environment Variables
//! - `HASHCOST_SECRET`: Secret to hash (UTF-8 bytes)
//! - `HASHCOST_REPETITIONS`: Invocations per algorithm
//! - `HASHCOST_ALGORITHMS`: Comma list, e.g. `sha256,argon2id`
//! - `HASHCOST_BCRYPT_COST`: bcrypt cost (log2 rounds)
//! - `HASHCOST_SCRYPT_N`, `HASHCOST_SCRYPT_R`, `HASHCOST_SCRYPT_P`: scrypt tunables
//! - `HASHCOST_ARGON2_TIME_COST`: Argon2id passes
//! - `HASHCOST_ARGON2_MEMORY_KIB`: Argon2id memory in KiB
//! - `HASHCOST_ARGON2_PARALLELISM`: Argon2id lanes
//!
//! Values are only parsed here. Range checks happen when each algorithm is
//! set up, so an out-of-range tunable skips that algorithm instead of the
//! whole run.

use std::str::FromStr;

use hashcost_domain::{AlgorithmKind, BenchConfig, BenchError, Result};

pub const SECRET_VAR: &str = "HASHCOST_SECRET";
pub const REPETITIONS_VAR: &str = "HASHCOST_REPETITIONS";
pub const ALGORITHMS_VAR: &str = "HASHCOST_ALGORITHMS";
pub const BCRYPT_COST_VAR: &str = "HASHCOST_BCRYPT_COST";
pub const SCRYPT_N_VAR: &str = "HASHCOST_SCRYPT_N";
pub const SCRYPT_R_VAR: &str = "HASHCOST_SCRYPT_R";
pub const SCRYPT_P_VAR: &str = "HASHCOST_SCRYPT_P";
pub const ARGON2_TIME_COST_VAR: &str = "HASHCOST_ARGON2_TIME_COST";
pub const ARGON2_MEMORY_KIB_VAR: &str = "HASHCOST_ARGON2_MEMORY_KIB";
pub const ARGON2_PARALLELISM_VAR: &str = "HASHCOST_ARGON2_PARALLELISM";

/// Load configuration from the defaults plus environment overrides
///
/// # Errors
/// Returns `BenchError::InvalidSetting` naming the variable if an override is
/// set but cannot be parsed, or if `HASHCOST_ALGORITHMS` names no algorithm.
pub fn load_from_env() -> Result<BenchConfig> {
    let mut config = BenchConfig::default();

    if let Some(secret) = env_var(SECRET_VAR) {
        config.secret = secret.into_bytes();
    }
    if let Some(repetitions) = env_parse(REPETITIONS_VAR)? {
        config.repetitions = repetitions;
    }
    if let Some(list) = env_var(ALGORITHMS_VAR) {
        config.algorithms = parse_algorithms(&list)?;
    }

    if let Some(cost) = env_parse(BCRYPT_COST_VAR)? {
        config.bcrypt.cost = cost;
    }

    if let Some(n) = env_parse(SCRYPT_N_VAR)? {
        config.scrypt.n = n;
    }
    if let Some(r) = env_parse(SCRYPT_R_VAR)? {
        config.scrypt.r = r;
    }
    if let Some(p) = env_parse(SCRYPT_P_VAR)? {
        config.scrypt.p = p;
    }

    if let Some(time_cost) = env_parse(ARGON2_TIME_COST_VAR)? {
        config.argon2.time_cost = time_cost;
    }
    if let Some(memory) = env_parse(ARGON2_MEMORY_KIB_VAR)? {
        config.argon2.memory_cost_kib = memory;
    }
    if let Some(parallelism) = env_parse(ARGON2_PARALLELISM_VAR)? {
        config.argon2.parallelism = parallelism;
    }

    tracing::debug!(
        repetitions = config.repetitions,
        algorithms = ?config.algorithms,
        secret_len = config.secret.len(),
        "Configuration loaded"
    );

    Ok(config)
}

/// Parse a comma-separated algorithm list, keeping its order.
///
/// Blank entries are ignored; an empty list is an error.
fn parse_algorithms(list: &str) -> Result<Vec<AlgorithmKind>> {
    let algorithms = list
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<AlgorithmKind>().map_err(|e| match e {
                BenchError::InvalidSetting { reason, .. } => invalid(ALGORITHMS_VAR, reason),
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if algorithms.is_empty() {
        return Err(invalid(ALGORITHMS_VAR, "no algorithms listed"));
    }
    Ok(algorithms)
}

/// Get an optional environment variable
///
/// Unset and non-UTF-8 values both count as absent.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `BenchError::InvalidSetting` if the variable is set but does not
/// parse as `T`.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_var(key)
        .map(|raw| raw.trim().parse::<T>().map_err(|e| invalid(key, format!("'{raw}': {e}"))))
        .transpose()
}

fn invalid(key: &str, reason: impl Into<String>) -> BenchError {
    BenchError::InvalidSetting { key: key.to_string(), reason: reason.into() }
}
