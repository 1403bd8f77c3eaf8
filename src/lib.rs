// src/lib.rs
// ============================================================================
// Module: Functional Forms Root
// Description: Public API surface for the functional-forms catalogue.
// Purpose: Wire together concept modules, re-exports, and the compose macro.
// Dependencies: crate::{error, immutable, lazy, reduction, resource, search,
//              strategy, strings}
// ============================================================================

//! ## Overview
//! A compact catalogue of functional forms: recursion instead of loop state,
//! lazy single-use sequences, interchangeable strategies behind one contract,
//! immutable value records, pure string transforms, and scope-bound resource
//! release. Each module is independent; each documented fact is asserted by
//! the test suite.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod error;
pub mod immutable;
pub mod lazy;
pub mod reduction;
pub mod resource;
pub mod search;
pub mod strategy;
pub mod strings;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::FormsError;
pub use error::FormsResult;
pub use immutable::Colour;
pub use immutable::Rgb;
pub use immutable::blue;
pub use immutable::green;
pub use immutable::max_by_measure;
pub use immutable::peak_by;
pub use immutable::red;
pub use lazy::FactorVec;
pub use lazy::PrimeFactors;
pub use lazy::factor_vec;
pub use lazy::limits;
pub use lazy::prime_factors;
pub use reduction::max_recursive;
pub use reduction::sum_multiples;
pub use reduction::sum_multiples_iter;
pub use reduction::sum_recursive;
pub use reduction::sum_to;
pub use reduction::until;
pub use resource::ResourceError;
pub use resource::ScratchFile;
pub use resource::read_message;
pub use resource::roundtrip_message;
pub use resource::write_message;
pub use search::contains;
pub use search::contains_recursive;
pub use strategy::Mersenne;
pub use strategy::NaivePow2;
pub use strategy::Pow2;
pub use strategy::Pow2Kind;
pub use strategy::ShiftPow2;
pub use strategy::SquaringPow2;
pub use strings::normalise_amount;
pub use strings::strip_chars;

// ============================================================================
// SECTION: Composition Macro
// ============================================================================

/// Macro for right-to-left composition of unary functions
///
/// `compose!(f, g, h)` builds the closure `|value| f(g(h(value)))`, so the
/// rightmost function runs first, matching mathematical composition order:
///
/// ```
/// use functional_forms::compose;
///
/// let add_then_double = compose!(|n: i64| n * 2, |n: i64| n + 1);
/// assert_eq!(add_then_double(3), 8);
/// ```
#[macro_export]
macro_rules! compose {
    // Base case: a single function composes to itself
    ($f:expr) => {
        $f
    };

    // Recursive case: bind the composed tail once, then apply the head to
    // it. Binding outside the closure keeps the result callable repeatedly
    // even when the composed functions are not Copy.
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let composed_tail = compose!($($rest),+);
        move |value| $f(composed_tail(value))
    }};
}
