// src/reduction.rs
// ============================================================================
// Module: Recursive Reductions
// Description: Sum and range construction expressed as recursion over slices.
// Purpose: Contrast recursive, compositional, and iterator renditions of one fact.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! Reductions written without loop state. The recursive forms define their
//! result by a base case plus a shorter-input case; the iterator forms express
//! the same facts through lazy adaptor pipelines. Both agree on every input,
//! which the test suite asserts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::FormsError;
use crate::error::FormsResult;

// ============================================================================
// SECTION: Recursive Sum
// ============================================================================

/// Sums a sequence by structural recursion
///
/// Two cases define the result: the sum of an empty slice is zero (the
/// additive identity), and the sum of a non-empty slice is its head plus the
/// sum of its tail. Each call recurses on a strictly shorter slice, so the
/// base case is always reached.
#[must_use]
pub fn sum_recursive(values: &[i64]) -> i64 {
    match values {
        [] => 0,
        [head, tail @ ..] => head + sum_recursive(tail),
    }
}

/// Returns the greatest element of a non-empty sequence, recursively
///
/// A singleton is its own maximum; otherwise the maximum is the greater of
/// the head and the maximum of the tail. The empty sequence has no maximum:
/// this is the same failure a reduction hits when it is handed an already
/// drained sequence.
///
/// # Errors
/// Returns [`FormsError::EmptySequence`] when `values` is empty.
pub fn max_recursive(values: &[i64]) -> FormsResult<i64> {
    match values {
        [] => Err(FormsError::EmptySequence),
        [only] => Ok(*only),
        [head, tail @ ..] => Ok((*head).max(max_recursive(tail)?)),
    }
}

// ============================================================================
// SECTION: Recursive Range Construction
// ============================================================================

/// Builds the filtered half-open range `[value, upper)` by recursion
///
/// Three cases: reaching the upper bound yields the empty sequence; a value
/// accepted by the filter contributes a one-element prefix followed by the
/// rest of the range; a rejected value contributes nothing. The value climbs
/// toward the bound on every call, so termination is guaranteed for
/// `value <= upper`.
pub fn until<F>(upper: i64, filter: F, value: i64) -> Vec<i64>
where
    F: Fn(i64) -> bool,
{
    /// Recursive worker borrowing the filter so it is not moved per call
    fn climb<F>(upper: i64, filter: &F, value: i64) -> Vec<i64>
    where
        F: Fn(i64) -> bool,
    {
        if value >= upper {
            return Vec::new();
        }
        if filter(value) {
            let mut range = vec![value];
            range.extend(climb(upper, filter, value + 1));
            return range;
        }
        climb(upper, filter, value + 1)
    }

    climb(upper, &filter, value)
}

// ============================================================================
// SECTION: Composition
// ============================================================================

/// Sums the multiples of three and five below the bound, compositionally
///
/// Defined as the composition of the two recursive forms above: a sequence of
/// values passing a divisibility test, reduced by the recursive sum. No
/// intermediate variable tracks computation state.
#[must_use]
pub fn sum_multiples(bound: i64) -> i64 {
    sum_recursive(&until(bound, |value| value % 3 == 0 || value % 5 == 0, 0))
}

/// Sums the multiples of three and five below the bound, as a pipeline
///
/// The same fact as [`sum_multiples`] expressed through lazy iterator
/// adaptors. Elements are produced one at a time; no intermediate collection
/// is materialized.
#[must_use]
pub fn sum_multiples_iter(bound: i64) -> i64 {
    (0 .. bound).filter(|value| value % 3 == 0 || value % 5 == 0).sum()
}

// ============================================================================
// SECTION: Non-Strict Consumption
// ============================================================================

/// Sums the naturals strictly below the limit from an unbounded source
///
/// Consumes an endless counter lazily and stops at the limit. The portion of
/// the source beyond the limit is never evaluated, which is the point: the
/// producer's extent does not bound the consumer's work.
#[must_use]
pub fn sum_to(limit: i64) -> i64 {
    (0 ..).take_while(|&value| value < limit).sum()
}
