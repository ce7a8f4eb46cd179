//! Palindrome checker
//!
//! Text is normalized (Unicode alphanumerics kept, lowercased, everything
//! else dropped) and compared to its reverse. An empty or single-character
//! normalized string is a palindrome.
//!
//! Every step is traced to a [`DiagnosticSink`]: the raw input, each
//! character decision, the cleaned and reversed strings, and the verdict.
//! The trace never affects the result.
//!
//! # Error policy
//!
//! Unlike the calculators, a failure here is not masked. An input with no
//! textual representation is logged at ERROR level and returned to the
//! caller as `Err`.

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::normalizer::{coerce_text, normalize_text};
use crate::{Result, Value};

pub use crate::normalizer::normalize;

// ── Public API ────────────────────────────────────────────

/// Check a value, tracing through `tracing`
///
/// # Errors
/// Returns `TextCoercion` when the value cannot be converted to text.
pub fn is_palindrome(word: impl Into<Value>) -> Result<bool> {
    is_palindrome_with(&word.into(), &mut TracingSink)
}

/// Check a string slice, tracing through `tracing`
pub fn is_palindrome_str(text: &str) -> bool {
    is_palindrome_str_with(text, &mut TracingSink)
}

/// Check a string slice, tracing every step to `sink`
///
/// Strings always convert to text, so this cannot fail. The trace is the
/// same one [`is_palindrome_with`] emits for a `Value::String`.
pub fn is_palindrome_str_with(text: &str, sink: &mut dyn DiagnosticSink) -> bool {
    trace_input(&Value::from(text), sink);
    sink.info(&format!("Original input after conversion: '{}'", text));
    check_text(text, text, sink)
}

/// Check a value, tracing every step to `sink`
///
/// # Errors
/// Returns `TextCoercion` when the value cannot be converted to text. The
/// failure is logged to `sink` before it is returned.
pub fn is_palindrome_with(word: &Value, sink: &mut dyn DiagnosticSink) -> Result<bool> {
    trace_input(word, sink);
    let text = match coerce_text(word) {
        Ok(text) => text,
        Err(err) => {
            sink.error(&format!("Error processing input '{}': {}", word, err));
            sink.error(&format!("Error type: {}", err.kind()));
            return Err(err);
        }
    };
    sink.info(&format!("Original input after conversion: '{}'", text));

    Ok(check_text(&text, &word.to_string(), sink))
}

/// Compare an already-normalized string with its reverse
pub fn is_normalized_palindrome(cleaned: &str) -> bool {
    cleaned.chars().eq(cleaned.chars().rev())
}

// ── Internals ─────────────────────────────────────────────

fn trace_input(word: &Value, sink: &mut dyn DiagnosticSink) {
    sink.info(&format!("Starting palindrome check for input: '{}'", word));
    match word.len() {
        Some(len) => sink.info(&format!("Input type: {}, Length: {}", word.type_name(), len)),
        None => sink.info(&format!("Input type: {}", word.type_name())),
    }
    sink.debug("Step 1: Converting input to text if needed");
}

fn check_text(text: &str, label: &str, sink: &mut dyn DiagnosticSink) -> bool {
    sink.debug(
        "Step 2: Cleaning input - removing non-alphanumeric characters and converting to lowercase",
    );
    let cleaned = normalize_text(text, sink);
    let length = cleaned.chars().count();
    sink.info(&format!("Cleaned string: '{}' (length: {})", cleaned, length));

    // Step 3: edge cases
    if length == 0 {
        sink.info("Empty string after cleaning - returning true (empty string is a palindrome)");
        return true;
    }
    if length == 1 {
        sink.info("Single character after cleaning - returning true (single character is a palindrome)");
        return true;
    }

    sink.debug("Step 4: Checking if cleaned string is palindrome");
    let reversed: String = cleaned.chars().rev().collect();
    sink.debug(&format!("Original cleaned: '{}'", cleaned));
    sink.debug(&format!("Reversed string: '{}'", reversed));

    let result = cleaned == reversed;
    sink.info(&format!("Palindrome check result: {}", result));
    if result {
        sink.info(&format!("[PALINDROME] '{}' IS a palindrome (cleaned: '{}')", label, cleaned));
    } else {
        sink.info(&format!(
            "[NOT PALINDROME] '{}' is NOT a palindrome (cleaned: '{}')",
            label, cleaned
        ));
    }
    result
}
