//! Port interfaces for hash algorithms
//!
//! These traits are the seams between the measurement harness and the
//! algorithm implementations: the driver only ever sees `dyn HashAlgorithm`,
//! and factories only ever draw randomness through `dyn SaltSource`.

use hashcost_domain::{AlgorithmKind, BenchError, Result};
use rand::rngs::OsRng;
use rand::RngCore;

use super::operation::HashOperation;

/// Factory for one algorithm family with its own parameter schema
pub trait HashAlgorithm: Send + Sync {
    /// Report name, e.g. `"Argon2id"`.
    fn name(&self) -> &str;

    /// Parameter summary for the report header, or `None` if the algorithm
    /// has no tunables.
    fn parameters(&self) -> Option<String> {
        None
    }

    /// Validate tunables, generate salt material, and bind both into a
    /// [`HashOperation`].
    ///
    /// All randomness and parameter precomputation happens here, never inside
    /// the returned callable.
    ///
    /// # Errors
    /// `BenchError::Configuration` naming the offending tunable, or
    /// `BenchError::Entropy` if salt generation fails.
    fn prepare(&self, secret: &[u8], salts: &dyn SaltSource) -> Result<HashOperation>;
}

/// Source of salt bytes
pub trait SaltSource: Send + Sync {
    /// Fill `buf` with fresh random bytes.
    ///
    /// # Errors
    /// `BenchError::Entropy` if the underlying generator fails.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Salt drawn from the operating system's entropy source
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| BenchError::Entropy(e.to_string()))
    }
}

/// Generate a fixed-size salt and log only its length.
pub(crate) fn generate_salt<const N: usize>(
    salts: &dyn SaltSource,
    kind: AlgorithmKind,
) -> Result<[u8; N]> {
    let mut salt = [0u8; N];
    salts.fill(&mut salt)?;
    tracing::debug!(algorithm = %kind, salt_len = N, "Generated salt material");
    Ok(salt)
}
