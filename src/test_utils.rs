// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons in layout and transition tests.
//!
//! Re-exports the `approx` assertion macro, which handles floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Tolerance for sizes derived from scale ratios.
pub const LAYOUT_EPSILON: f32 = 1e-3;
