//! # Error Types
//!
//! Domain-specific error types for pricewise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricewise-core errors (this file)                                     │
//! │  ├── PricingError     - What compute_price / parse_input return        │
//! │  │   ├── InvalidCost(ValidationError)                                  │
//! │  │   ├── InvalidMargin(ValidationError)                                │
//! │  │   └── DivisionError                                                 │
//! │  └── ValidationError  - Why a single field was rejected                │
//! │                                                                         │
//! │  terminal shell errors (separate crate)                                │
//! │  └── ApiError         - What the user sees (title + message)           │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → ApiError → Alert               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field and value in messages
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for a single form field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The field was left empty.
    #[error("{field} is required")]
    Required { field: String },

    /// The field text does not parse as a number.
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: String, value: String },

    /// The value parsed but is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must be zero or greater.
    #[error("{field} must be 0 or greater")]
    Negative { field: String },

    /// Value falls outside the half-open range `[min, max)`.
    #[error("{field} must be at least {min} and less than {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors returned by the pricing calculation.
///
/// None are retried; all are surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Cost missing, non-numeric, negative, or not finite.
    #[error("Invalid cost: {0}")]
    InvalidCost(ValidationError),

    /// Margin missing, non-numeric, or outside `[0, 100)`.
    #[error("Invalid margin: {0}")]
    InvalidMargin(ValidationError),

    /// Margin resolves to exactly 100%, which would divide by zero.
    #[error("Margin of {margin_percent}% is too close to 100%; the price cannot be calculated")]
    DivisionError { margin_percent: f64 },

    /// A valid cost and margin produced a price too large for `f64`.
    #[error("The price for a cost of {cost} at {margin_percent}% margin is too large to calculate")]
    Overflow { cost: f64, margin_percent: f64 },
}

impl PricingError {
    /// Returns the machine-readable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::InvalidCost(_) => ErrorKind::InvalidCost,
            PricingError::InvalidMargin(_) => ErrorKind::InvalidMargin,
            PricingError::DivisionError { .. } => ErrorKind::DivisionError,
            PricingError::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

/// Flat error kind, for callers that only branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidCost,
    InvalidMargin,
    DivisionError,
    Overflow,
}

impl ErrorKind {
    /// True for errors caused by what the user typed, as opposed to
    /// errors raised while computing.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ErrorKind::InvalidCost | ErrorKind::InvalidMargin)
    }
}

/// Convenience type alias for Results with PricingError.
pub type CoreResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
