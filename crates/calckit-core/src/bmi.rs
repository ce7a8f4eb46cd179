//! BMI calculator with layered validation
//!
//! `bmi = weight / height²`, height in meters and weight in kilograms,
//! rounded to two decimals with `f64::round` (half away from zero).
//!
//! # Stages
//!
//! 1. Numeric coercion of height, then weight
//! 2. Positivity of height, then weight
//! 3. Evaluation and rounding
//!
//! Each stage stops at the first failure and prints which field failed and
//! why. Callers of [`calculate_bmi`] only ever see `None`.

use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::normalizer::coerce_number;
use crate::validator::{require_finite, require_positive};
use crate::{Error, Result, Value};

// ── Validation Helpers ────────────────────────────────────

/// Coerce one field to `f64`, printing the failure
pub fn validate_numeric_input(
    value: &Value,
    field_name: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<f64> {
    coerce_number(value, field_name).map_err(|err| report(err, sink))
}

/// Require a strictly positive field, printing the failure
pub fn validate_positive_value(
    value: f64,
    field_name: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<f64> {
    require_positive(value, field_name).map_err(|err| report(err, sink))
}

/// Run both validation stages over height and weight
///
/// A valid pair comes back unchanged.
pub fn validate_bmi_inputs(
    height: &Value,
    weight: &Value,
    sink: &mut dyn DiagnosticSink,
) -> Result<(f64, f64)> {
    let height = validate_numeric_input(height, "height", sink)?;
    let weight = validate_numeric_input(weight, "weight", sink)?;

    let height = validate_positive_value(height, "height", sink)?;
    let weight = validate_positive_value(weight, "weight", sink)?;

    Ok((height, weight))
}

fn report(err: Error, sink: &mut dyn DiagnosticSink) -> Error {
    sink.error(&format!("Error: {}", err));
    err
}

// ── Evaluation ────────────────────────────────────────────

/// Round to two decimal places
///
/// Values too large to scale by 100 already have no fractional digits and
/// are returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Validate and evaluate, reporting the first failure
///
/// # Errors
/// `InvalidType` or `InvalidDomain` from validation, `Arithmetic` when the
/// quotient is not finite.
pub fn try_calculate_bmi(
    height: &Value,
    weight: &Value,
    sink: &mut dyn DiagnosticSink,
) -> Result<f64> {
    let (height, weight) = validate_bmi_inputs(height, weight, sink)?;
    let bmi = require_finite(weight / height.powi(2), "bmi")?;
    Ok(round2(bmi))
}

/// BMI rounded to two decimals, or `None` for invalid input
///
/// ```
/// use calckit_core::bmi::calculate_bmi;
///
/// assert_eq!(calculate_bmi(1.75, 70), Some(22.86));
/// assert_eq!(calculate_bmi(0, 70), None);
/// ```
pub fn calculate_bmi(height: impl Into<Value>, weight: impl Into<Value>) -> Option<f64> {
    calculate_bmi_with(&height.into(), &weight.into(), &mut ConsoleSink)
}

/// [`calculate_bmi`] printing to an explicit sink
pub fn calculate_bmi_with(
    height: &Value,
    weight: &Value,
    sink: &mut dyn DiagnosticSink,
) -> Option<f64> {
    match try_calculate_bmi(height, weight, sink) {
        Ok(bmi) => Some(bmi),
        Err(err @ Error::Arithmetic(_)) => {
            sink.error(&format!("Unexpected error calculating BMI: {}", err));
            None
        }
        // Validation failures were printed by the stage that caught them
        Err(_) => None,
    }
}

// ── Categories ────────────────────────────────────────────

/// Adult BMI category (WHO cut-offs 18.5 / 25 / 30)
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "underweight"),
            BmiCategory::Normal => write!(f, "normal"),
            BmiCategory::Overweight => write!(f, "overweight"),
            BmiCategory::Obese => write!(f, "obese"),
        }
    }
}
