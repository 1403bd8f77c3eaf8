// src/strategy.rs
// ============================================================================
// Module: Power-of-Two Strategies
// Description: One contract, three interchangeable implementations.
// Purpose: Demonstrate the strategy form: a wrapper parameterized by algorithm.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! Three ways to compute a power of two behind one trait: an iterative shift,
//! a linear recursion, and exponentiation by squaring. The [`Mersenne`]
//! wrapper accepts any of them and derives `2^n - 1` without caring which
//! algorithm runs. The contract is that every strategy agrees on every input,
//! including the overflow boundary, which the property tests assert.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::FormsError;
use crate::error::FormsResult;

// ============================================================================
// SECTION: Strategy Contract
// ============================================================================

/// Contract for computing a power of two
///
/// Implementations must agree exactly: same value for every power in
/// `0..64`, and the same [`FormsError::Overflow`] for powers beyond the
/// width of `u64`.
pub trait Pow2 {
    /// Computes `2^power`
    ///
    /// # Errors
    /// Returns [`FormsError::Overflow`] when `power` is 64 or more.
    fn pow2(&self, power: u32) -> FormsResult<u64>;
}

// ============================================================================
// SECTION: Strategy Implementations
// ============================================================================

/// Iterative shift strategy
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Clone, Copy)]
pub struct ShiftPow2;

impl Pow2 for ShiftPow2 {
    fn pow2(&self, power: u32) -> FormsResult<u64> {
        1u64.checked_shl(power).ok_or(FormsError::overflow(power))
    }
}

/// Naive linear recursion strategy
///
/// One multiplication per unit of the power. Pedagogically the direct
/// transcription of the definition `2^0 = 1`, `2^n = 2 * 2^(n-1)`.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Clone, Copy)]
pub struct NaivePow2;

impl Pow2 for NaivePow2 {
    fn pow2(&self, power: u32) -> FormsResult<u64> {
        // Reject out-of-domain powers before recursing so the reported power
        // is the requested one, matching every other strategy.
        if power >= u64::BITS {
            return Err(FormsError::overflow(power));
        }
        if power == 0 {
            return Ok(1);
        }
        let half_step = self.pow2(power - 1)?;
        half_step.checked_mul(2).ok_or(FormsError::overflow(power))
    }
}

/// Exponentiation-by-squaring strategy
///
/// Odd powers peel off one factor of two; even powers square the result of
/// the half power. Logarithmically many multiplications in the power.
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Clone, Copy)]
pub struct SquaringPow2;

impl Pow2 for SquaringPow2 {
    fn pow2(&self, power: u32) -> FormsResult<u64> {
        // Reject out-of-domain powers before recursing so the reported power
        // is the requested one, matching every other strategy.
        if power >= u64::BITS {
            return Err(FormsError::overflow(power));
        }
        if power == 0 {
            return Ok(1);
        }
        if power % 2 == 1 {
            let rest = self.pow2(power - 1)?;
            return rest.checked_mul(2).ok_or(FormsError::overflow(power));
        }
        let root = self.pow2(power / 2)?;
        root.checked_mul(root).ok_or(FormsError::overflow(power))
    }
}

// ============================================================================
// SECTION: Runtime Strategy Selection
// ============================================================================

/// Runtime-selectable power-of-two strategy
///
/// # Invariants
/// - Enumerates the supported strategy implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pow2Kind {
    /// Iterative shift (default)
    Shift,
    /// Naive linear recursion
    Naive,
    /// Exponentiation by squaring
    Squaring,
}

impl Pow2 for Pow2Kind {
    fn pow2(&self, power: u32) -> FormsResult<u64> {
        match self {
            Self::Shift => ShiftPow2.pow2(power),
            Self::Naive => NaivePow2.pow2(power),
            Self::Squaring => SquaringPow2.pow2(power),
        }
    }
}

// ============================================================================
// SECTION: Mersenne Wrapper
// ============================================================================

/// Mersenne number generator parameterized by a power-of-two strategy
///
/// The wrapper is the higher-order half of the form: it is constructed from
/// an algorithm and applies it, rather than fixing one. Construction stores
/// no other state.
///
/// # Invariants
/// - Holds exactly the strategy it was constructed with.
#[derive(Debug, Clone, Copy)]
pub struct Mersenne<S> {
    /// Power-of-two strategy applied on every call
    strategy: S,
}

impl<S: Pow2> Mersenne<S> {
    /// Creates a Mersenne generator backed by the given strategy
    #[must_use]
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
        }
    }

    /// Computes the Mersenne number `2^power - 1`
    ///
    /// # Errors
    /// Returns [`FormsError::Overflow`] when the underlying power does not
    /// fit in a `u64`.
    pub fn value(&self, power: u32) -> FormsResult<u64> {
        Ok(self.strategy.pow2(power)? - 1)
    }
}
