// tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers for the catalogue integration tests.
// ============================================================================
//! ## Overview
//! Shared helpers so every integration test reports failures through
//! `Result` instead of panicking mid-assertion.

use std::error::Error;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across the catalogue integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Returns an error when a test condition fails.
///
/// The message rides directly in the boxed error; no dedicated failure type
/// is needed for condition checks.
///
/// # Errors
/// Returns a boxed error carrying `message` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(message.into().into()) }
}
