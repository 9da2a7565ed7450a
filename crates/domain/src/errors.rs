//! Error types used throughout the benchmark

use thiserror::Error;

/// Main error type for hashcost
#[derive(Error, Debug)]
pub enum BenchError {
    /// A tunable violates the constraints of the underlying primitive.
    /// Raised at factory time, before any timing.
    #[error("{algorithm}: invalid {tunable}: {reason}")]
    Configuration { algorithm: String, tunable: &'static str, reason: String },

    /// The timer was called with an argument it cannot honour.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The wrapped hash computation failed; `iteration` is 1-based.
    #[error("{algorithm} failed on iteration {iteration}: {reason}")]
    OperationFailed { algorithm: String, iteration: u32, reason: String },

    /// The system randomness source could not produce salt material.
    #[error("Entropy error: {0}")]
    Entropy(String),

    /// An environment override is present but cannot be parsed.
    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl BenchError {
    /// Build a [`BenchError::Configuration`] for one algorithm's tunable.
    pub fn configuration(
        algorithm: impl Into<String>,
        tunable: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Configuration { algorithm: algorithm.into(), tunable, reason: reason.into() }
    }

    /// Whether the driver may skip the affected algorithm and carry on.
    ///
    /// Factory-time and timing-time failures only cost that algorithm its
    /// row. Argument, setting and output errors abort the whole run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::OperationFailed { .. } | Self::Entropy(_)
        )
    }
}

/// Failure reported by a single hash invocation.
///
/// Carries only a message: the timer attaches the algorithm name and the
/// iteration index when it wraps this into [`BenchError::OperationFailed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvocationError(pub String);

impl InvocationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type alias for hashcost operations
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_names_algorithm_and_tunable() {
        let err = BenchError::configuration("Argon2id", "memory_cost", "too low");
        assert_eq!(err.to_string(), "Argon2id: invalid memory_cost: too low");
        assert!(err.is_recoverable());
    }

    #[test]
    fn operation_failed_reports_iteration() {
        let err = BenchError::OperationFailed {
            algorithm: "scrypt".to_string(),
            iteration: 3,
            reason: "out of memory".to_string(),
        };
        assert_eq!(err.to_string(), "scrypt failed on iteration 3: out of memory");
        assert!(err.is_recoverable());
    }

    #[test]
    fn invalid_argument_is_fatal() {
        assert!(!BenchError::InvalidArgument("repetitions must be >= 1".into()).is_recoverable());
        assert!(!BenchError::InvalidSetting { key: "K".into(), reason: "bad".into() }
            .is_recoverable());
    }
}
