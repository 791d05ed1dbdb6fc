//! Error types
//!
//! Validation failures raised by the aggregators and calculators. Non-fatal
//! conditions (a nutrient missing from a snapshot, no heart-rate samples)
//! default to zero and never surface here.

use thiserror::Error;

/// Validation error types
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A food entry's reference serving size was zero, negative, or NaN.
    #[error("serving size must be positive, got {0}")]
    InvalidServingSize(f64),

    /// The daily calorie goal was zero, negative, or NaN.
    #[error("calorie goal must be positive, got {0}")]
    InvalidGoal(f64),

    /// The selected BMR algorithm needs an input that was not provided.
    #[error("{algorithm} requires {field}")]
    MissingBmrInput {
        algorithm: &'static str,
        field: &'static str,
    },
}

/// Result type for engine computations
pub type Result<T> = std::result::Result<T, ValidationError>;
