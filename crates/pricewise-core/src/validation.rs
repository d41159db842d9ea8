//! # Validation Module
//!
//! Turns raw form text into a checked [`PricingInput`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Text → number (parse_number)                                 │
//! │  ├── empty field        → Required                                     │
//! │  └── not a number       → NotANumber                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Range checks (validate_cost / validate_margin)               │
//! │  ├── NaN / infinity     → NotFinite                                    │
//! │  ├── cost < 0           → Negative                                     │
//! │  ├── margin == 100      → DivisionError                                │
//! │  └── margin ∉ [0, 100)  → OutOfRange                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  compute_price runs Layer 2 again, so a PricingInput built by hand     │
//! │  gets the same checks as one parsed from the form.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricewise_core::validation::parse_input;
//! use pricewise_core::{RoundingMode, RoundingUnit};
//!
//! let input = parse_input(" 1000 ", "50", RoundingMode::Nearest, RoundingUnit::Ones).unwrap();
//! assert_eq!(input.cost, 1000.0);
//!
//! assert!(parse_input("", "50", RoundingMode::Nearest, RoundingUnit::Ones).is_err());
//! ```

use crate::error::{CoreResult, PricingError, ValidationError};
use crate::types::{PricingInput, RoundingMode, RoundingUnit};
use crate::{MAX_MARGIN_PERCENT, MIN_MARGIN_PERCENT};

/// Field name used in cost error messages.
pub const COST_FIELD: &str = "cost";

/// Field name used in margin error messages.
pub const MARGIN_FIELD: &str = "margin";

// =============================================================================
// Text Parsing
// =============================================================================

/// Parses a free-text field as a real number.
///
/// Surrounding whitespace is ignored. Returns `Required` for an empty field
/// and `NotANumber` for anything `f64` cannot parse.
pub fn parse_number(field: &str, text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    text.parse::<f64>().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        value: text.to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cost value.
///
/// ## Rules
/// - Must be finite
/// - Must be zero or greater (zero is allowed)
pub fn validate_cost(cost: f64) -> CoreResult<f64> {
    if !cost.is_finite() {
        return Err(PricingError::InvalidCost(ValidationError::NotFinite {
            field: COST_FIELD.to_string(),
        }));
    }

    if cost < 0.0 {
        return Err(PricingError::InvalidCost(ValidationError::Negative {
            field: COST_FIELD.to_string(),
        }));
    }

    Ok(cost)
}

/// Validates a target margin in percent.
///
/// ## Rules
/// - Must be finite
/// - Exactly 100 is reported as [`PricingError::DivisionError`]
/// - Otherwise must lie in `[0, 100)`
///
/// ## Example
/// ```rust
/// use pricewise_core::validation::validate_margin;
/// use pricewise_core::ErrorKind;
///
/// assert!(validate_margin(0.0).is_ok());
/// assert!(validate_margin(99.99).is_ok());
/// assert_eq!(validate_margin(100.0).unwrap_err().kind(), ErrorKind::DivisionError);
/// assert_eq!(validate_margin(150.0).unwrap_err().kind(), ErrorKind::InvalidMargin);
/// ```
pub fn validate_margin(margin_percent: f64) -> CoreResult<f64> {
    if !margin_percent.is_finite() {
        return Err(PricingError::InvalidMargin(ValidationError::NotFinite {
            field: MARGIN_FIELD.to_string(),
        }));
    }

    if margin_percent == MAX_MARGIN_PERCENT {
        return Err(PricingError::DivisionError { margin_percent });
    }

    if !(MIN_MARGIN_PERCENT..MAX_MARGIN_PERCENT).contains(&margin_percent) {
        return Err(PricingError::InvalidMargin(ValidationError::OutOfRange {
            field: MARGIN_FIELD.to_string(),
            min: MIN_MARGIN_PERCENT,
            max: MAX_MARGIN_PERCENT,
        }));
    }

    Ok(margin_percent)
}

// =============================================================================
// Form Input
// =============================================================================

/// Builds a [`PricingInput`] from the text of the cost and margin fields.
///
/// Cost is checked before margin, so a form with both fields wrong reports
/// the cost problem.
pub fn parse_input(
    cost_text: &str,
    margin_text: &str,
    rounding_mode: RoundingMode,
    rounding_unit: RoundingUnit,
) -> CoreResult<PricingInput> {
    let cost = parse_number(COST_FIELD, cost_text).map_err(PricingError::InvalidCost)?;
    let cost = validate_cost(cost)?;

    let margin = parse_number(MARGIN_FIELD, margin_text).map_err(PricingError::InvalidMargin)?;
    let margin = validate_margin(margin)?;

    Ok(PricingInput::new(cost, margin, rounding_mode, rounding_unit))
}

// =============================================================================
// Unit Tests
// =============================================================================
