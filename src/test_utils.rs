// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float
//! comparison, which properly handle floating-point precision issues that
//! `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor
/// floating-point errors.
pub const F32_EPSILON: f32 = 1e-4;

/// Absolute-difference equality assertion that applies [`F32_EPSILON`] as the
/// default tolerance when no explicit `epsilon` is supplied, forwarding any
/// explicit form straight through to [`approx::assert_abs_diff_eq`].
#[macro_export]
macro_rules! assert_abs_diff_eq {
    ($left:expr, $right:expr $(,)?) => {
        ::approx::assert_abs_diff_eq!(
            $left,
            $right,
            epsilon = $crate::test_utils::F32_EPSILON
        )
    };
    ($($rest:tt)*) => {
        ::approx::assert_abs_diff_eq!($($rest)*)
    };
}

pub use assert_abs_diff_eq;
