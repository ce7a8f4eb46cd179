//! Error types for calckit
//!
//! Fallible stages return `Result<T, Error>`. Whether an error reaches the
//! caller depends on the calculator: the discount and BMI calculators mask
//! every error into their sentinel, the palindrome checker propagates.

use thiserror::Error;

/// calckit error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input could not be coerced to a number
    #[error("{field} must be a numeric value, got {value}")]
    InvalidType { field: String, value: String },

    /// Input was numeric but outside the allowed domain
    #[error("{field} must be {constraint}, got {value}")]
    InvalidDomain {
        field: String,
        value: f64,
        constraint: &'static str,
    },

    /// Arithmetic produced a value that is not a finite number
    #[error("arithmetic failure: {0}")]
    Arithmetic(String),

    /// Input has no textual representation
    #[error("cannot convert {type_name} to text")]
    TextCoercion { type_name: &'static str },
}

impl Error {
    /// Short name of the error kind, used in diagnostic traces
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidType { .. } => "InvalidType",
            Error::InvalidDomain { .. } => "InvalidDomain",
            Error::Arithmetic(_) => "Arithmetic",
            Error::TextCoercion { .. } => "TextCoercion",
        }
    }
}

/// Result type alias for calckit operations
pub type Result<T> = std::result::Result<T, Error>;
