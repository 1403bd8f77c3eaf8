// src/tests.rs
// ============================================================================
// Module: In-Crate Smoke Tests
// Description: Minimal checks that the module surfaces hang together.
// ============================================================================
//! ## Overview
//! Smoke checks for cross-module composition. The example-level facts live in
//! the integration suite under `tests/`.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use crate::compose;
use crate::reduction::sum_recursive;
use crate::reduction::until;
use crate::strategy::Mersenne;
use crate::strategy::Pow2Kind;

#[test]
fn recursive_forms_compose() {
    let multiples = until(10, |value| value % 3 == 0 || value % 5 == 0, 0);
    assert_eq!(sum_recursive(&multiples), 23);
}

#[test]
fn compose_macro_runs_rightmost_first() {
    /// Drops the first element; a fn item links the input and output lifetimes.
    fn tail(values: &[i64]) -> &[i64] {
        &values[1 ..]
    }

    let strip_then_sum = compose!(sum_recursive, tail);
    assert_eq!(strip_then_sum(&[100, 1, 2, 3]), 6);
}

#[test]
fn compose_macro_chains_three_and_stays_callable() {
    let label = String::from("total");
    let describe = move |value: i64| format!("{label}: {value}");

    let chained = compose!(describe, |value: i64| value * 2, |value: i64| value + 1);
    assert_eq!(chained(3), "total: 8");
    assert_eq!(chained(0), "total: 2");
}

#[test]
fn mersenne_over_kind_dispatch() {
    for kind in [Pow2Kind::Shift, Pow2Kind::Naive, Pow2Kind::Squaring] {
        assert_eq!(Mersenne::new(kind).value(4), Ok(15));
    }
}
