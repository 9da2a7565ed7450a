//! scrypt (memory-hard hash A)

use std::hint::black_box;

use ::scrypt::{scrypt, Params};
use hashcost_domain::constants::{MAX_WORKING_MEMORY, SALT_LEN, SCRYPT_OUTPUT_LEN};
use hashcost_domain::{AlgorithmKind, BenchError, InvocationError, Result, ScryptParams};

use super::operation::HashOperation;
use super::ports::{generate_salt, HashAlgorithm, SaltSource};

/// scrypt factory
#[derive(Debug, Clone, Copy)]
pub struct ScryptHasher {
    params: ScryptParams,
}

impl ScryptHasher {
    pub fn new(params: ScryptParams) -> Self {
        Self { params }
    }

    /// Validate the tunables and convert them to the primitive's parameters.
    ///
    /// # Errors
    /// `BenchError::Configuration` naming `n`, `r`, `p`, or `params` when the
    /// combination is rejected by the scrypt crate itself. A working set
    /// above `MAX_WORKING_MEMORY` is reported against `n`.
    pub fn primitive_params(&self) -> Result<Params> {
        let ScryptParams { n, r, p } = self.params;
        let name = AlgorithmKind::Scrypt.display_name();

        if n < 2 || !n.is_power_of_two() {
            return Err(BenchError::configuration(
                name,
                "n",
                format!("{n} is not a power of two >= 2"),
            ));
        }
        if r == 0 {
            return Err(BenchError::configuration(name, "r", "block size must be >= 1"));
        }
        if p == 0 {
            return Err(BenchError::configuration(name, "p", "parallelism must be >= 1"));
        }

        // V holds N blocks and B holds p blocks, each 128 * r bytes
        let working_set = u64::from(r)
            .checked_mul(128)
            .and_then(|block| n.checked_add(u64::from(p))?.checked_mul(block))
            .filter(|bytes| *bytes <= MAX_WORKING_MEMORY);
        if working_set.is_none() {
            return Err(BenchError::configuration(
                name,
                "n",
                format!(
                    "N={n}, r={r}, p={p} needs more than the {MAX_WORKING_MEMORY} byte limit"
                ),
            ));
        }

        // n is a power of two below 2^64, so log2 fits in a u8
        let log_n = n.trailing_zeros() as u8;
        Params::new(log_n, r, p, SCRYPT_OUTPUT_LEN)
            .map_err(|e| BenchError::configuration(name, "params", e.to_string()))
    }
}

impl HashAlgorithm for ScryptHasher {
    fn name(&self) -> &str {
        AlgorithmKind::Scrypt.display_name()
    }

    fn parameters(&self) -> Option<String> {
        let ScryptParams { n, r, p } = self.params;
        Some(format!("N={n}, r={r}, p={p}"))
    }

    fn prepare(&self, secret: &[u8], salts: &dyn SaltSource) -> Result<HashOperation> {
        let params = self.primitive_params()?;
        let salt = generate_salt::<SALT_LEN>(salts, AlgorithmKind::Scrypt)?;
        let secret = secret.to_vec();
        let mut output = [0u8; SCRYPT_OUTPUT_LEN];

        Ok(HashOperation::new(self.name(), move || {
            scrypt(&secret, &salt, &params, &mut output)
                .map_err(|e| InvocationError::new(e.to_string()))?;
            black_box(&output);
            Ok(())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::ports::OsSaltSource;

    fn hasher(n: u64, r: u32, p: u32) -> ScryptHasher {
        ScryptHasher::new(ScryptParams { n, r, p })
    }

    #[test]
    fn rejects_non_power_of_two_n() {
        for n in [0, 1, 1000, 16383] {
            let err = hasher(n, 8, 1).prepare(b"secret", &OsSaltSource).unwrap_err();
            assert!(matches!(err, BenchError::Configuration { tunable: "n", .. }), "n={n}");
        }
    }

    #[test]
    fn rejects_zero_block_size_and_parallelism() {
        let err = hasher(1024, 0, 1).prepare(b"secret", &OsSaltSource).unwrap_err();
        assert!(matches!(err, BenchError::Configuration { tunable: "r", .. }));

        let err = hasher(1024, 8, 0).prepare(b"secret", &OsSaltSource).unwrap_err();
        assert!(matches!(err, BenchError::Configuration { tunable: "p", .. }));
    }

    #[test]
    fn rejects_working_set_beyond_limit() {
        let err = hasher(1 << 40, 8, 1).prepare(b"secret", &OsSaltSource).unwrap_err();

        assert!(matches!(err, BenchError::Configuration { tunable: "n", .. }));
        assert!(err.to_string().contains("limit"));
    }

    #[test]
    fn working_set_arithmetic_does_not_overflow() {
        let err = hasher(1 << 63, u32::MAX, u32::MAX).prepare(b"secret", &OsSaltSource).unwrap_err();
        assert!(matches!(err, BenchError::Configuration { tunable: "n", .. }));
    }

    #[test]
    fn default_parameters_fit_the_limit() {
        assert!(hasher(16384, 8, 1).primitive_params().is_ok());
    }

    #[test]
    fn small_parameters_hash() {
        let mut op = hasher(16, 1, 1).prepare(b"secret", &OsSaltSource).unwrap();

        op.invoke().unwrap();
        assert_eq!(op.name(), "scrypt");
    }

    #[test]
    fn parameters_use_report_format() {
        assert_eq!(hasher(16384, 8, 1).parameters().as_deref(), Some("N=16384, r=8, p=1"));
    }
}
