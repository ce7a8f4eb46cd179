//! Input normalizer: coerces loosely-typed values into the types the
//! formulas need
//!
//! # Rules
//!
//! Numeric coercion:
//! - `Integer` and `Float` convert directly
//! - `Boolean` becomes `1.0` / `0.0`
//! - `String` is trimmed and parsed (`"70"`, `" 1.75 "`, `"1e2"`, `"inf"`, `"nan"`)
//! - `Null`, `Array`, `Object` fail with [`Error::InvalidType`]
//!
//! Text coercion:
//! - `String` is borrowed as-is
//! - `Boolean`, `Integer`, `Float` use their display form
//! - `Array` and `Object` use their display form (`[1, "a"]`, `{"k":1}`)
//! - `Null` fails with [`Error::TextCoercion`]
//!
//! Text normalization keeps Unicode alphanumerics, lowercased, in their
//! original order, and drops everything else.
//!
//! # Guarantees
//!
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`
//! - **Deterministic**: same input always produces same output

use std::borrow::Cow;

use crate::diagnostics::{DiagnosticSink, NullSink};
use crate::{Error, Result, Value};

// ── Numeric Coercion ──────────────────────────────────────

/// Coerce a value to `f64`, naming `field` in the error on failure
pub fn coerce_number(value: &Value, field: &str) -> Result<f64> {
    let invalid = || Error::InvalidType {
        field: field.to_string(),
        value: value.to_string(),
    };

    match value {
        Value::Integer(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}

// ── Text Coercion ─────────────────────────────────────────

/// Coerce a value to text
pub fn coerce_text(value: &Value) -> Result<Cow<'_, str>> {
    match value {
        Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
        Value::Null => Err(Error::TextCoercion {
            type_name: value.type_name(),
        }),
        _ => Ok(Cow::Owned(value.to_string())),
    }
}

// ── Text Normalization ────────────────────────────────────

/// Normalize text for palindrome comparison, tracing every character
/// decision at DEBUG level
pub fn normalize_text(text: &str, sink: &mut dyn DiagnosticSink) -> String {
    let mut cleaned = String::with_capacity(text.len());

    for (i, c) in text.chars().enumerate() {
        if !c.is_alphanumeric() {
            sink.debug(&format!("Character {}: '{}' -> removed (not alphanumeric)", i, c));
            continue;
        }

        // Some lowercase mappings expand into combining marks; only the
        // alphanumeric part is retained.
        let lowered: String = c.to_lowercase().filter(|l| l.is_alphanumeric()).collect();
        sink.debug(&format!("Character {}: '{}' -> '{}' (kept)", i, c, lowered));
        cleaned.push_str(&lowered);
    }

    cleaned
}

/// Normalize text without emitting diagnostics
pub fn normalize(text: &str) -> String {
    normalize_text(text, &mut NullSink)
}
