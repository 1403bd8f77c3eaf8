// src/immutable.rs
// ============================================================================
// Module: Immutable Values
// Description: Tuple accessors, named records, and wrap-process-unwrap.
// Purpose: Show positional data growing names without growing mutation.
// Dependencies: serde::{Deserialize, Serialize}, std::fmt
// ============================================================================

//! ## Overview
//! Immutable value forms at three levels of ceremony: a bare tuple picked
//! apart by accessor functions, a named record with derived serialization,
//! and a higher-order selection over tuple series (wrap with a key, process
//! with an ordering, unwrap the winner). None of them mutate their inputs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Positional Colour
// ============================================================================

/// A colour as a bare positional triple in red, green, blue order
pub type Rgb = (u8, u8, u8);

/// Returns the red component of a positional colour
#[must_use]
pub const fn red(colour: Rgb) -> u8 {
    colour.0
}

/// Returns the green component of a positional colour
#[must_use]
pub const fn green(colour: Rgb) -> u8 {
    colour.1
}

/// Returns the blue component of a positional colour
#[must_use]
pub const fn blue(colour: Rgb) -> u8 {
    colour.2
}

// ============================================================================
// SECTION: Named Colour Record
// ============================================================================

/// A colour with named components and a display name
///
/// The named form of [`Rgb`]: same data, but the positions carry names the
/// compiler checks and serde serializes. The record is a plain value; every
/// operation on it produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
    /// Human-readable colour name
    pub name: String,
}

impl Colour {
    /// Creates a named colour record
    #[must_use]
    pub fn new(red: u8, green: u8, blue: u8, name: impl Into<String>) -> Self {
        Self {
            red,
            green,
            blue,
            name: name.into(),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Colour {} red={}, green={}, blue={}>",
            self.name, self.red, self.green, self.blue
        )
    }
}

// ============================================================================
// SECTION: Wrap-Process-Unwrap
// ============================================================================

/// Selects the element with the greatest key, keeping the first on ties
///
/// The higher-order half of the wrap-process-unwrap form: callers wrap each
/// element with a key function, the fold processes pairs by comparing keys,
/// and the reference returned is the unwrapped original element. Returns
/// `None` for the empty slice.
pub fn peak_by<T, K, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    items.iter().fold(None, |best, item| match best {
        Some(current) if key(item) <= key(current) => Some(current),
        _ => Some(item),
    })
}

/// Selects the year-measure pair with the greatest measure
///
/// The concrete instance of [`peak_by`] used throughout the examples: a
/// series of `(year, measure)` pairs selected by the second position rather
/// than the default tuple ordering.
#[must_use]
pub fn max_by_measure(series: &[(u16, f64)]) -> Option<&(u16, f64)> {
    peak_by(series, |entry| entry.1)
}
