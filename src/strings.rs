// src/strings.rs
// ============================================================================
// Module: Pure String Transforms
// Description: Character removal in postfix-chained and prefix-recursive forms.
// Purpose: Show that string operations returning new strings compose freely.
// Dependencies: std
// ============================================================================

//! ## Overview
//! String transforms as pure functions: every operation returns a new string
//! and leaves its input untouched. The postfix form chains method calls on
//! the value; the prefix form is an ordinary recursive function over the set
//! of characters to remove. Both agree on every input.

// ============================================================================
// SECTION: Postfix Chaining
// ============================================================================

/// Normalises a currency amount by chained replacement
///
/// Each `replace` is itself pure, so the chain reads left to right as a
/// pipeline of values: strip the currency sign, then strip the thousands
/// separators.
#[must_use]
pub fn normalise_amount(amount: &str) -> String {
    amount.replace('£', "").replace(',', "")
}

// ============================================================================
// SECTION: Prefix Recursion
// ============================================================================

/// Removes every occurrence of each listed character, recursively
///
/// The base case returns the text unchanged when no characters remain to
/// remove. Otherwise the first listed character is stripped everywhere and
/// the function recurses with the remaining characters. Each call shortens
/// the character list, so the base case is always reached.
#[must_use]
pub fn strip_chars(text: &str, chars: &str) -> String {
    let mut listed = chars.chars();
    match listed.next() {
        None => text.to_string(),
        Some(first) => strip_chars(&text.replace(first, ""), listed.as_str()),
    }
}
