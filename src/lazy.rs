// src/lazy.rs
// ============================================================================
// Module: Lazy Sequences
// Description: On-demand prime factorization and single-use sequence helpers.
// Purpose: Demonstrate lazy production, eager collection, and clone-based reuse.
// Dependencies: crate::error, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! A lazy sequence computes elements only when the consumer asks for them.
//! [`PrimeFactors`] enumerates the prime factors of a positive integer by
//! trial division, one factor per `next` call; nothing past the consumer's
//! demand is ever computed. A drained sequence yields `None` thereafter, so
//! helpers that need two passes, such as [`limits`], require a `Clone`
//! iterator and traverse independent copies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use smallvec::SmallVec;

use crate::error::FormsError;
use crate::error::FormsResult;

// ============================================================================
// SECTION: Prime Factor Sequence
// ============================================================================

/// Inline-capacity collection of prime factors
///
/// Eight inline slots cover every value below 2^64 whose factors are all at
/// least 5; only heavily composite inputs spill to the heap.
pub type FactorVec = SmallVec<[u64; 8]>;

/// Lazy enumeration of the prime factors of a positive integer
///
/// Factors are produced in nondecreasing order by trial division. The factor
/// 2 is handled first so the remaining scan can step through odd candidates
/// only, halving the work. After each discovered factor the state recurses on
/// the cofactor by updating `remaining` in place, the manual tail-call form
/// of the recursive definition.
///
/// # Invariants
/// - `remaining` is the product of the factors not yet yielded.
/// - `candidate` never exceeds the square root of `remaining` by more than
///   one step; once it does, `remaining` itself is prime.
#[derive(Debug, Clone)]
pub struct PrimeFactors {
    /// Product of the factors not yet yielded
    remaining: u64,
    /// Next trial divisor to examine
    candidate: u64,
}

/// Creates the lazy prime-factor sequence for a positive integer
///
/// The sequence for 1 is empty. Zero has no prime factorization and is
/// rejected at construction rather than looping during iteration.
///
/// # Errors
/// Returns [`FormsError::FactorDomain`] when `value` is zero.
pub const fn prime_factors(value: u64) -> FormsResult<PrimeFactors> {
    if value == 0 {
        return Err(FormsError::factor_domain(value));
    }
    Ok(PrimeFactors {
        remaining: value,
        candidate: 2,
    })
}

impl Iterator for PrimeFactors {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining <= 1 {
            return None;
        }

        // Factor 2 first: all later candidates can then be odd.
        if self.candidate == 2 {
            if self.remaining % 2 == 0 {
                self.remaining /= 2;
                return Some(2);
            }
            self.candidate = 3;
        }

        // Trial division up to the square root of the cofactor. The bound is
        // checked by division to stay exact without overflowing the square.
        while self.candidate <= self.remaining / self.candidate {
            if self.remaining % self.candidate == 0 {
                let factor = self.candidate;
                self.remaining /= factor;
                return Some(factor);
            }
            self.candidate += 2;
        }

        // No candidate divides the cofactor, so the cofactor is prime.
        let prime = self.remaining;
        self.remaining = 1;
        Some(prime)
    }
}

// ============================================================================
// SECTION: Eager Collection
// ============================================================================

/// Collects the full prime factorization of a positive integer
///
/// The eager counterpart to [`prime_factors`], for callers that want the
/// whole sequence at once.
///
/// # Errors
/// Returns [`FormsError::FactorDomain`] when `value` is zero.
pub fn factor_vec(value: u64) -> FormsResult<FactorVec> {
    Ok(prime_factors(value)?.collect())
}

// ============================================================================
// SECTION: Two-Pass Helpers
// ============================================================================

/// Returns the minimum and maximum of a sequence in one call
///
/// A drained iterator cannot be traversed again, so this helper requires a
/// `Clone` source and runs each extremum over an independent copy. Returns
/// `None` for the empty sequence.
pub fn limits<I>(sequence: I) -> Option<(I::Item, I::Item)>
where
    I: Iterator + Clone,
    I::Item: Ord,
{
    let min = sequence.clone().min()?;
    let max = sequence.max()?;
    Some((min, max))
}
