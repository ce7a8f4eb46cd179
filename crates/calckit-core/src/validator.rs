//! Domain validator, checks coerced quantities against their constraints
//!
//! A value that passes is returned unchanged; validation never rounds,
//! clamps or otherwise alters a valid input. NaN satisfies no constraint.

use crate::{Error, Result};

/// Domain constraint applied to a coerced quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Strictly greater than zero
    Positive,
    /// Zero or greater
    NonNegative,
}

impl Constraint {
    pub fn holds(self, value: f64) -> bool {
        match self {
            Constraint::Positive => value > 0.0,
            Constraint::NonNegative => value >= 0.0,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Constraint::Positive => "positive",
            Constraint::NonNegative => "non-negative",
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

// ── Public API ────────────────────────────────────────────

/// Check `value` against `constraint`, returning it unchanged on success
pub fn validate(value: f64, field: &str, constraint: Constraint) -> Result<f64> {
    if constraint.holds(value) {
        Ok(value)
    } else {
        Err(Error::InvalidDomain {
            field: field.to_string(),
            value,
            constraint: constraint.describe(),
        })
    }
}

pub fn require_positive(value: f64, field: &str) -> Result<f64> {
    validate(value, field, Constraint::Positive)
}

pub fn require_non_negative(value: f64, field: &str) -> Result<f64> {
    validate(value, field, Constraint::NonNegative)
}

/// Reject results that are infinite or NaN
pub fn require_finite(value: f64, context: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Arithmetic(format!("{} is not finite ({})", context, value)))
    }
}
