//! SHA-256 baseline
//!
//! Unsalted and fast. It is the reference point the slow hashes are compared
//! against, NOT something to store passwords with.

use std::hint::black_box;

use hashcost_domain::{AlgorithmKind, InvocationError, Result};
use sha2::{Digest, Sha256};

use super::operation::HashOperation;
use super::ports::{HashAlgorithm, SaltSource};

const HEX_DIGEST_LEN: usize = 64;

/// Fast digest factory (no tunables, no setup)
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl Sha256Digest {
    pub fn new() -> Self {
        Self
    }
}

impl HashAlgorithm for Sha256Digest {
    fn name(&self) -> &str {
        AlgorithmKind::Sha256.display_name()
    }

    fn prepare(&self, secret: &[u8], _salts: &dyn SaltSource) -> Result<HashOperation> {
        let secret = secret.to_vec();
        let mut hex_out = [0u8; HEX_DIGEST_LEN];

        Ok(HashOperation::new(self.name(), move || {
            let digest = Sha256::digest(&secret);
            hex::encode_to_slice(digest, &mut hex_out)
                .map_err(|e| InvocationError::new(format!("hex encoding failed: {e}")))?;
            black_box(&hex_out);
            Ok(())
        }))
    }
}
