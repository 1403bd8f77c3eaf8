// tests/strategy.rs
// ============================================================================
// Module: Strategy Tests
// Description: Tests for the power-of-two strategies and Mersenne wrapper.
// ============================================================================
//! ## Overview
//! Validates that the three power-of-two strategies agree through the
//! Mersenne wrapper, including at the overflow boundary, and that runtime
//! dispatch matches direct use.

mod support;

use functional_forms::FormsError;
use functional_forms::Mersenne;
use functional_forms::NaivePow2;
use functional_forms::Pow2;
use functional_forms::Pow2Kind;
use functional_forms::ShiftPow2;
use functional_forms::SquaringPow2;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Agreement Facts
// ============================================================================

#[test]
fn test_all_strategies_give_fifteen() -> TestResult {
    ensure(Mersenne::new(ShiftPow2).value(4)? == 15, "Expected shift strategy to give 15")?;
    ensure(Mersenne::new(NaivePow2).value(4)? == 15, "Expected naive strategy to give 15")?;
    ensure(Mersenne::new(SquaringPow2).value(4)? == 15, "Expected squaring strategy to give 15")?;
    Ok(())
}

#[test]
fn test_known_mersenne_prime() -> TestResult {
    ensure(
        Mersenne::new(SquaringPow2).value(17)? == 131_071,
        "Expected 2^17 - 1 to be 131071",
    )?;
    Ok(())
}

#[test]
fn test_zero_power_yields_zero() -> TestResult {
    ensure(Mersenne::new(ShiftPow2).value(0)? == 0, "Expected 2^0 - 1 to be 0")?;
    Ok(())
}

// ============================================================================
// SECTION: Overflow Boundary
// ============================================================================

#[test]
fn test_largest_representable_power() -> TestResult {
    ensure(
        Mersenne::new(SquaringPow2).value(63)? == (1u64 << 63) - 1,
        "Expected the largest in-domain Mersenne number",
    )?;
    Ok(())
}

#[test]
fn test_overflow_is_reported_not_wrapped() -> TestResult {
    for kind in [Pow2Kind::Shift, Pow2Kind::Naive, Pow2Kind::Squaring] {
        ensure(
            kind.pow2(64) == Err(FormsError::overflow(64)),
            "Expected power 64 to overflow identically for every strategy",
        )?;
    }
    Ok(())
}

#[test]
fn test_overflow_reports_the_requested_power() -> TestResult {
    // Past the boundary the recursive strategies must not surface the power
    // at which their inner recursion gave up.
    for power in [65, 80, u32::MAX] {
        for kind in [Pow2Kind::Shift, Pow2Kind::Naive, Pow2Kind::Squaring] {
            ensure(
                kind.pow2(power) == Err(FormsError::overflow(power)),
                "Expected every strategy to report the requested power",
            )?;
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Runtime Dispatch
// ============================================================================

#[test]
fn test_kind_dispatch_matches_direct_use() -> TestResult {
    for power in 0 .. 64 {
        let direct = ShiftPow2.pow2(power)?;
        ensure(
            Pow2Kind::Naive.pow2(power)? == direct,
            "Expected naive dispatch to match the shift result",
        )?;
        ensure(
            Pow2Kind::Squaring.pow2(power)? == direct,
            "Expected squaring dispatch to match the shift result",
        )?;
    }
    Ok(())
}
