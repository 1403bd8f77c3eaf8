// src/search.rs
// ============================================================================
// Module: Linear Search Forms
// Description: Membership tests in iterative and recursive renditions.
// Purpose: Contrast loop-state search with structural recursion over slices.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Two renditions of linear membership. The iterative form walks the slice
//! with an explicit loop; the recursive form asks whether the head matches and
//! otherwise recurses on the tail. Both are generic over any comparable
//! element type and agree on every input.

// ============================================================================
// SECTION: Iterative Search
// ============================================================================

/// Returns true when the slice contains the element, by explicit iteration
#[must_use]
pub fn contains<T: PartialEq>(values: &[T], element: &T) -> bool {
    for value in values {
        if value == element {
            return true;
        }
    }
    false
}

// ============================================================================
// SECTION: Recursive Search
// ============================================================================

/// Returns true when the slice contains the element, by structural recursion
///
/// The empty slice contains nothing; a non-empty slice contains the element
/// when its head matches or its tail does. Each call recurses on a strictly
/// shorter slice, so the base case is always reached.
#[must_use]
pub fn contains_recursive<T: PartialEq>(values: &[T], element: &T) -> bool {
    match values {
        [] => false,
        [head, tail @ ..] => head == element || contains_recursive(tail, element),
    }
}
