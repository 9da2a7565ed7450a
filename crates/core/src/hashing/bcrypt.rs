//! bcrypt (cost-factor hash)

use std::fmt;
use std::hint::black_box;

use hashcost_domain::constants::{BCRYPT_MAX_COST, BCRYPT_MIN_COST, SALT_LEN};
use hashcost_domain::{AlgorithmKind, BcryptParams, BenchError, InvocationError, Result};

use super::operation::HashOperation;
use super::ports::{generate_salt, HashAlgorithm, SaltSource};

/// A validated cost paired with 16 raw salt bytes
///
/// This is the bcrypt "salt" in the sense of the modular crypt format, where
/// the cost is part of the salt string.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BcryptSalt {
    cost: u32,
    raw: [u8; SALT_LEN],
}

impl BcryptSalt {
    /// # Errors
    /// `BenchError::Configuration` if `cost` is outside 4..=31.
    pub fn new(cost: u32, raw: [u8; SALT_LEN]) -> Result<Self> {
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
            return Err(BenchError::configuration(
                AlgorithmKind::Bcrypt.display_name(),
                "cost",
                format!("{cost} is outside {BCRYPT_MIN_COST}..={BCRYPT_MAX_COST}"),
            ));
        }
        Ok(Self { cost, raw })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn raw(&self) -> &[u8; SALT_LEN] {
        &self.raw
    }
}

impl fmt::Debug for BcryptSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BcryptSalt").field("cost", &self.cost).field("raw", &"[REDACTED]").finish()
    }
}

/// bcrypt factory
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    params: BcryptParams,
}

impl BcryptHasher {
    pub fn new(params: BcryptParams) -> Self {
        Self { params }
    }

    /// Build the cost-encoded salt for one operation.
    ///
    /// # Errors
    /// Fails on an out-of-range cost before any randomness is drawn.
    pub fn generate_salt(&self, salts: &dyn SaltSource) -> Result<BcryptSalt> {
        BcryptSalt::new(self.params.cost, [0u8; SALT_LEN])?;
        let raw = generate_salt::<SALT_LEN>(salts, AlgorithmKind::Bcrypt)?;
        BcryptSalt::new(self.params.cost, raw)
    }
}

impl HashAlgorithm for BcryptHasher {
    fn name(&self) -> &str {
        AlgorithmKind::Bcrypt.display_name()
    }

    fn parameters(&self) -> Option<String> {
        Some(format!("cost={}", self.params.cost))
    }

    fn prepare(&self, secret: &[u8], salts: &dyn SaltSource) -> Result<HashOperation> {
        let salt = self.generate_salt(salts)?;
        let secret = secret.to_vec();

        Ok(HashOperation::new(self.name(), move || {
            let parts = ::bcrypt::hash_with_salt(&secret, salt.cost(), *salt.raw())
                .map_err(|e| InvocationError::new(e.to_string()))?;
            black_box(parts);
            Ok(())
        }))
    }
}
