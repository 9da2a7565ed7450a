//! Testing utilities and helpers
//!
//! - **[`assertions`]**: assertion macros and functions for error messages
//!   and floating-point latencies
//!
//! Enable with the `test-utils` feature from a `[dev-dependencies]` entry.
//!
//! ```rust
//! let result: Result<(), String> = Err("memory cost too low".to_string());
//! hashcost_common::assert_error_contains!(result, "memory cost");
//!
//! hashcost_common::testing::assert_approx_eq(2.0000001, 2.0, 1e-3);
//! ```

pub mod assertions;

// Note: macros exported with #[macro_export] are available at crate root
pub use assertions::{assert_approx_eq, assert_non_negative};
