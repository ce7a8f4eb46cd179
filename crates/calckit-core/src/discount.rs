//! Discount calculator
//!
//! `final = max(0, price - price * discount_percent / 100)`
//!
//! Inputs are loosely typed. The price must be positive and the discount
//! non-negative; there is no upper bound on the discount, a discount above
//! 100% floors the price at zero. A non-positive price returns before any
//! division, so division by zero cannot occur.
//!
//! # Error policy
//!
//! [`try_discounted_price`] reports why a computation failed.
//! [`get_discounted_price`] masks every failure into [`SENTINEL`]; only
//! arithmetic faults are mentioned on the diagnostic channel.
//!
//! Every intermediate must be finite. An infinite price is an arithmetic
//! fault at any rate, 0% included (`inf * 0` is NaN), and is masked to `0`
//! like any other overflow.

use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::normalizer::coerce_number;
use crate::validator::{require_finite, require_non_negative, require_positive};
use crate::{Error, Result, Value};

/// Returned by [`get_discounted_price`] for any invalid computation
pub const SENTINEL: f64 = 0.0;

// ── Public API ────────────────────────────────────────────

/// Coerce, validate and evaluate, reporting the first failure
///
/// # Errors
/// `InvalidType` when either input is not numeric, `InvalidDomain` for a
/// non-positive price or negative discount, `Arithmetic` when the
/// intermediate values overflow.
pub fn try_discounted_price(price: &Value, discount_percent: &Value) -> Result<f64> {
    let original_price = coerce_number(price, "price")?;
    let discount_rate = coerce_number(discount_percent, "discount_percent")?;

    let original_price = require_positive(original_price, "price")?;
    let discount_rate = require_non_negative(discount_rate, "discount_percent")?;

    apply_discount(original_price, discount_rate)
}

/// Evaluate the formula on already-validated quantities
pub fn apply_discount(price: f64, discount_rate: f64) -> Result<f64> {
    let discount_amount = require_finite(price * discount_rate / 100.0, "discount amount")?;
    let final_price = require_finite(price - discount_amount, "final price")?;
    Ok(final_price.max(0.0))
}

/// Discounted price, or `0` for any invalid input
///
/// ```
/// use calckit_core::discount::get_discounted_price;
///
/// assert_eq!(get_discounted_price(100, 20), 80.0);
/// assert_eq!(get_discounted_price(0, 15), 0.0);
/// assert_eq!(get_discounted_price("abc", 10), 0.0);
/// ```
pub fn get_discounted_price(price: impl Into<Value>, discount_percent: impl Into<Value>) -> f64 {
    get_discounted_price_with(&price.into(), &discount_percent.into(), &mut ConsoleSink)
}

/// [`get_discounted_price`] reporting to an explicit sink
pub fn get_discounted_price_with(
    price: &Value,
    discount_percent: &Value,
    sink: &mut dyn DiagnosticSink,
) -> f64 {
    mask(&try_discounted_price(price, discount_percent), sink)
}

/// Collapse an outcome of [`try_discounted_price`] into a price
///
/// Arithmetic faults are reported to `sink`; validation failures are not.
/// Both become [`SENTINEL`].
pub fn mask(outcome: &Result<f64>, sink: &mut dyn DiagnosticSink) -> f64 {
    match outcome {
        Ok(final_price) => *final_price,
        Err(err @ Error::Arithmetic(_)) => {
            sink.error(&format!("Unexpected error in get_discounted_price: {}", err));
            SENTINEL
        }
        Err(_) => SENTINEL,
    }
}
