// src/error.rs
// ============================================================================
// Module: Forms Error Definitions
// Description: Structured diagnostics for the pure catalogue modules.
// Purpose: Centralize domain failures so every module reports them uniformly.
// Dependencies: serde::{Serialize, Deserialize}, std::fmt
// ============================================================================

//! ## Overview
//! Centralizes the domain errors shared by the pure modules (factorization,
//! reductions, power-of-two strategies) along with their user-facing messaging
//! so callers see one error surface regardless of which form they exercised.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Errors that can occur while evaluating the pure catalogue forms
///
/// Every variant describes an input outside a form's documented domain.
/// The pure functions never panic; inputs they cannot handle are reported
/// through this enum instead.
///
/// # Invariants
/// - None. Variants capture structured domain failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormsError {
    // ============================================================================
    // SECTION: Domain Errors
    // ============================================================================
    /// Prime factorization was requested for a value outside its domain
    FactorDomain {
        /// The offending input value
        value: u64,
    },

    /// A reduction that needs at least one element received an empty sequence
    EmptySequence,

    // ============================================================================
    // SECTION: Arithmetic Errors
    // ============================================================================
    /// A power-of-two strategy was asked for a power the result type cannot hold
    Overflow {
        /// The requested power of two
        power: u32,
    },
}

// ============================================================================
// SECTION: Display Implementation
// ============================================================================

impl fmt::Display for FormsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactorDomain {
                value,
            } => {
                write!(f, "Cannot factorize {value}: value must be positive")
            }
            Self::EmptySequence => {
                write!(f, "Reduction requires at least one element")
            }
            Self::Overflow {
                power,
            } => {
                write!(f, "2^{power} does not fit in a u64")
            }
        }
    }
}

// ============================================================================
// SECTION: Standard Trait Implementations
// ============================================================================

impl std::error::Error for FormsError {}

// ============================================================================
// SECTION: Convenience Helpers
// ============================================================================

impl FormsError {
    /// Creates a factorization domain error for the given input
    #[must_use]
    pub const fn factor_domain(value: u64) -> Self {
        Self::FactorDomain {
            value,
        }
    }

    /// Creates an overflow error for the given power
    #[must_use]
    pub const fn overflow(power: u32) -> Self {
        Self::Overflow {
            power,
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for catalogue operations
pub type FormsResult<T = ()> = Result<T, FormsError>;

// Tests are in the central tests module (tests/error.rs)
