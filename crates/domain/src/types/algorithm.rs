//! Algorithm identities
//!
//! The variant order is the "weight class" order, fastest-expected first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BenchError;

/// One benchmarked algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    /// Fast general-purpose digest, the unsalted baseline
    Sha256,
    /// Cost-factor hash
    Bcrypt,
    /// Memory-hard hash A
    Scrypt,
    /// Memory-hard hash B, hybrid variant
    Argon2id,
}

impl AlgorithmKind {
    /// All algorithms in report order.
    pub const ALL: [AlgorithmKind; 4] = [Self::Sha256, Self::Bcrypt, Self::Scrypt, Self::Argon2id];

    /// Human-readable name used in the report and in errors.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Bcrypt => "bcrypt",
            Self::Scrypt => "scrypt",
            Self::Argon2id => "Argon2id",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = BenchError;

    /// Case-insensitive; accepts `sha256`/`sha-256`, `bcrypt`, `scrypt` and
    /// `argon2id`/`argon2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "bcrypt" => Ok(Self::Bcrypt),
            "scrypt" => Ok(Self::Scrypt),
            "argon2id" | "argon2" => Ok(Self::Argon2id),
            other => Err(BenchError::InvalidSetting {
                key: "algorithm".to_string(),
                reason: format!("unknown algorithm '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("SHA-256".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Sha256);
        assert_eq!(" Argon2 ".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Argon2id);
        assert_eq!("bcrypt".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Bcrypt);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "md5".parse::<AlgorithmKind>().unwrap_err();
        assert!(err.to_string().contains("md5"));
    }

    #[test]
    fn all_is_in_ascending_cost_order() {
        let mut sorted = AlgorithmKind::ALL;
        sorted.sort();
        assert_eq!(sorted, AlgorithmKind::ALL);
        assert_eq!(AlgorithmKind::ALL[0].to_string(), "SHA-256");
    }
}
