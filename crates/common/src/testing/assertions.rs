//! Custom assertions for testing
//!
//! Provides assertion macros and functions for common testing scenarios.

// Allow missing panics docs for test utilities - these assertions are designed to panic
// on failure which is their core purpose in test contexts
#![allow(clippy::missing_panics_doc)]

/// Assert that a `Result` is an error whose `Display` contains a substring
///
/// # Examples
///
/// ```
/// let result: Result<(), String> = Err("scrypt: invalid n: must be a power of two".to_string());
/// hashcost_common::assert_error_contains!(result, "power of two");
/// ```
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $substring:expr) => {
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let error_msg = format!("{}", e);
                assert!(
                    error_msg.contains($substring),
                    "Error message '{}' does not contain '{}'",
                    error_msg,
                    $substring
                );
            }
        }
    };
}

/// Assert that two floats are within `epsilon` of each other
///
/// # Examples
///
/// ```
/// use hashcost_common::testing::assertions::assert_approx_eq;
///
/// assert_approx_eq(0.1 + 0.2, 0.3, 1e-9);
/// ```
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Values not approximately equal: {} vs {} (diff: {})",
        actual,
        expected,
        diff
    );
}

/// Assert that a latency is a finite, non-negative number
///
/// # Examples
///
/// ```
/// use hashcost_common::testing::assertions::assert_non_negative;
///
/// assert_non_negative(0.0);
/// assert_non_negative(12.5);
/// ```
pub fn assert_non_negative(value: f64) {
    assert!(value.is_finite(), "Value is not finite: {}", value);
    assert!(value >= 0.0, "Value is negative: {}", value);
}
