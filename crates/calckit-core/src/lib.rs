//! calckit core: three small calculators built on one validation pipeline
//!
//! # Architecture
//!
//! ```text
//! Value → Normalizer → Validator → Evaluator → result / sentinel
//!              ↓            ↓           ↓
//!                   DiagnosticSink (side channel)
//! ```
//!
//! | Calculator   | Sentinel | Failure policy                     |
//! |--------------|----------|------------------------------------|
//! | [`discount`] | `0.0`    | masked                             |
//! | [`bmi`]      | `None`   | masked, each failure printed       |
//! | [`palindrome`] | none   | propagated as `Err` after logging  |
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces identical output
//! - **Non-lossy**: validation returns valid input unchanged
//! - **Side-channel only**: diagnostics never change a result

pub mod bmi;
pub mod diagnostics;
pub mod discount;
pub mod error;
pub mod normalizer;
pub mod palindrome;
pub mod validator;
pub mod value;

pub use bmi::{calculate_bmi, BmiCategory};
pub use diagnostics::DiagnosticSink;
pub use discount::get_discounted_price;
pub use error::{Error, Result};
pub use palindrome::is_palindrome;
pub use value::Value;
