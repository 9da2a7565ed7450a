//! Hash algorithm factories
//!
//! Each algorithm family is a [`HashAlgorithm`] implementation that owns its
//! parameter schema. `prepare` does the one-time setup (tunable validation,
//! salt generation, cost encoding) and hands back a [`HashOperation`] whose
//! every invocation is one hash and nothing else.
//!
//! | Algorithm | Factory | Setup |
//! |-----------|---------|-------|
//! | SHA-256 | [`Sha256Digest`] | none |
//! | bcrypt | [`BcryptHasher`] | cost check, 16-byte salt |
//! | scrypt | [`ScryptHasher`] | parameter check, 16-byte salt |
//! | Argon2id | [`Argon2idHasher`] | parameter check, 16-byte salt |
//!
//! ## Usage
//!
//! ```rust
//! use hashcost_core::hashing::{HashAlgorithm, OsSaltSource, Sha256Digest};
//!
//! let mut op = Sha256Digest::new().prepare(b"correct horse battery staple", &OsSaltSource)?;
//! op.invoke()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod argon2;
pub mod bcrypt;
pub mod operation;
pub mod ports;
pub mod scrypt;
pub mod sha256;

use hashcost_domain::{AlgorithmKind, BenchConfig};

pub use self::argon2::Argon2idHasher;
pub use self::bcrypt::{BcryptHasher, BcryptSalt};
pub use self::operation::HashOperation;
pub use self::ports::{HashAlgorithm, OsSaltSource, SaltSource};
pub use self::scrypt::ScryptHasher;
pub use self::sha256::Sha256Digest;

/// Build the factory for one algorithm from the configuration's tunables.
pub fn algorithm_for(kind: AlgorithmKind, config: &BenchConfig) -> Box<dyn HashAlgorithm> {
    match kind {
        AlgorithmKind::Sha256 => Box::new(Sha256Digest::new()),
        AlgorithmKind::Bcrypt => Box::new(BcryptHasher::new(config.bcrypt)),
        AlgorithmKind::Scrypt => Box::new(ScryptHasher::new(config.scrypt)),
        AlgorithmKind::Argon2id => Box::new(Argon2idHasher::new(config.argon2)),
    }
}

/// Factories for every enabled algorithm, in configured order.
pub fn algorithms_from_config(config: &BenchConfig) -> Vec<Box<dyn HashAlgorithm>> {
    config.algorithms.iter().map(|&kind| algorithm_for(kind, config)).collect()
}
