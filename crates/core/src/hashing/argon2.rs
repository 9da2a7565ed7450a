//! Argon2id (memory-hard hash B)

use std::hint::black_box;

use ::argon2::{Algorithm, Argon2, Error as Argon2Error, Params, Version};
use hashcost_domain::constants::{ARGON2_OUTPUT_LEN, MAX_WORKING_MEMORY, SALT_LEN};
use hashcost_domain::{AlgorithmKind, Argon2Params, BenchError, InvocationError, Result};

use super::operation::HashOperation;
use super::ports::{generate_salt, HashAlgorithm, SaltSource};

/// Argon2id factory (version 0x13, 32-byte output)
#[derive(Debug, Clone, Copy)]
pub struct Argon2idHasher {
    params: Argon2Params,
}

impl Argon2idHasher {
    pub fn new(params: Argon2Params) -> Self {
        Self { params }
    }

    /// Let the argon2 crate validate the tunables and build a context.
    ///
    /// # Errors
    /// `BenchError::Configuration` naming the rejected tunable, e.g.
    /// `memory_cost` when it is below `8 * parallelism` or its working set
    /// exceeds `MAX_WORKING_MEMORY`.
    pub fn context(&self) -> Result<Argon2<'static>> {
        let Argon2Params { time_cost, memory_cost_kib, parallelism } = self.params;
        let name = AlgorithmKind::Argon2id.display_name();

        // Params::new multiplies parallelism by 8 unchecked
        if parallelism > Params::MAX_P_COST {
            return Err(BenchError::configuration(
                name,
                "parallelism",
                format!("{parallelism} exceeds {}", Params::MAX_P_COST),
            ));
        }
        let min_memory = parallelism.checked_mul(8).unwrap_or(u32::MAX);
        if memory_cost_kib < min_memory {
            return Err(BenchError::configuration(
                name,
                "memory_cost",
                format!("{memory_cost_kib} KiB is below 8 KiB per lane ({min_memory} KiB)"),
            ));
        }
        let working_set = u64::from(memory_cost_kib) * 1024;
        if working_set > MAX_WORKING_MEMORY {
            return Err(BenchError::configuration(
                name,
                "memory_cost",
                format!("{working_set} bytes exceeds the {MAX_WORKING_MEMORY} byte limit"),
            ));
        }

        let params = Params::new(memory_cost_kib, time_cost, parallelism, Some(ARGON2_OUTPUT_LEN))
            .map_err(|e| {
                let reason = e.to_string();
                BenchError::configuration(name, rejected_tunable(e), reason)
            })?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

fn rejected_tunable(err: Argon2Error) -> &'static str {
    match err {
        Argon2Error::MemoryTooLittle | Argon2Error::MemoryTooMuch => "memory_cost",
        Argon2Error::TimeTooSmall => "time_cost",
        Argon2Error::ThreadsTooFew | Argon2Error::ThreadsTooMany => "parallelism",
        _ => "params",
    }
}

impl HashAlgorithm for Argon2idHasher {
    fn name(&self) -> &str {
        AlgorithmKind::Argon2id.display_name()
    }

    fn parameters(&self) -> Option<String> {
        let Argon2Params { time_cost, memory_cost_kib, parallelism } = self.params;
        Some(format!(
            "time_cost={time_cost}, memory_cost={memory_cost_kib} KiB, parallelism={parallelism}"
        ))
    }

    fn prepare(&self, secret: &[u8], salts: &dyn SaltSource) -> Result<HashOperation> {
        let context = self.context()?;
        let salt = generate_salt::<SALT_LEN>(salts, AlgorithmKind::Argon2id)?;
        let secret = secret.to_vec();
        let mut output = [0u8; ARGON2_OUTPUT_LEN];

        Ok(HashOperation::new(self.name(), move || {
            context
                .hash_password_into(&secret, &salt, &mut output)
                .map_err(|e| InvocationError::new(e.to_string()))?;
            black_box(&output);
            Ok(())
        }))
    }
}
