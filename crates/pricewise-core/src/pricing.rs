//! # Pricing Module
//!
//! The price calculator: cost + target margin + rounding policy in,
//! selling price + actual margin + profit out.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PricingInput { cost: 1999, margin: 0, Down, Hundreds }                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_cost / validate_margin                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  raw_price = cost / (1 - margin / 100)            = 1999                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  adjusted  = round_to_unit(raw, Hundreds, Down)   = 1900                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  actual margin = (1900 - 1999) / 1900 × 100       = -5.21 %             │
//! │  profit        = 1900 - 1999                      = -99                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding can push the price below cost (negative margin) or down to zero.
//! A zero or negative adjusted price reports a 0% margin and loses the whole
//! cost.

use crate::error::{CoreResult, PricingError};
use crate::rounding::round_to_unit;
use crate::types::{PricingInput, PricingResult};
use crate::validation::{validate_cost, validate_margin};
use crate::MAX_MARGIN_PERCENT;

/// Computes the suggested selling price for `input`.
///
/// ## Errors
/// - [`PricingError::InvalidCost`] if cost is negative or not finite
/// - [`PricingError::InvalidMargin`] if margin is outside `[0, 100)`
/// - [`PricingError::DivisionError`] if margin is exactly 100
/// - [`PricingError::Overflow`] if the price does not fit in an `f64`
///
/// ## Example
/// ```rust
/// use pricewise_core::{compute_price, PricingInput, RoundingMode, RoundingUnit};
///
/// let input = PricingInput::new(1999.0, 0.0, RoundingMode::Down, RoundingUnit::Hundreds);
/// let result = compute_price(&input).unwrap();
///
/// assert_eq!(result.adjusted_price, 1900.0);
/// assert_eq!(result.profit, -99.0);
/// ```
pub fn compute_price(input: &PricingInput) -> CoreResult<PricingResult> {
    let cost = validate_cost(input.cost)?;
    let margin_percent = validate_margin(input.margin_percent)?;

    let raw = raw_price(cost, margin_percent)?;
    let adjusted_price = round_to_unit(raw, input.rounding_unit, input.rounding_mode);
    if !raw.is_finite() || !adjusted_price.is_finite() {
        return Err(PricingError::Overflow { cost, margin_percent });
    }

    let (actual_margin_percent, profit) = margin_and_profit(cost, adjusted_price);

    Ok(PricingResult {
        raw_price: raw,
        adjusted_price,
        actual_margin_percent,
        profit,
    })
}

/// Theoretical selling price that yields `margin_percent` on `cost`.
///
/// Guards the division itself: a margin of exactly 100 returns
/// [`PricingError::DivisionError`] even when the caller skipped validation.
pub fn raw_price(cost: f64, margin_percent: f64) -> CoreResult<f64> {
    if margin_percent == MAX_MARGIN_PERCENT {
        return Err(PricingError::DivisionError { margin_percent });
    }

    Ok(cost / (1.0 - margin_percent / 100.0))
}

/// Actual margin (percent) and profit once the price has been rounded.
fn margin_and_profit(cost: f64, adjusted_price: f64) -> (f64, f64) {
    if adjusted_price > 0.0 {
        let profit = adjusted_price - cost;
        return (profit / adjusted_price * 100.0, profit);
    }

    // Nothing to sell for: the whole cost is lost, unless there was none.
    let profit = if cost == 0.0 { 0.0 } else { -cost };
    (0.0, profit)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{RoundingMode, RoundingUnit};

    const EPSILON: f64 = 1e-9;

    fn compute(cost: f64, margin: f64, mode: RoundingMode, unit: RoundingUnit) -> PricingResult {
        compute_price(&PricingInput::new(cost, margin, mode, unit)).unwrap()
    }

    #[test]
    fn test_zero_margin_rounds_to_nearest_unit() {
        let result = compute(761.9, 0.0, RoundingMode::Nearest, RoundingUnit::Ones);
        assert_eq!(result.raw_price, 761.9);
        assert_eq!(result.adjusted_price, 762.0);
        assert!((result.profit - 0.1).abs() < EPSILON);
        assert_eq!(result.profit.round(), 0.0);
    }

    #[test]
    fn test_fifty_percent_margin() {
        let result = compute(1000.0, 50.0, RoundingMode::Nearest, RoundingUnit::Ones);
        assert_eq!(result.raw_price, 2000.0);
        assert_eq!(result.adjusted_price, 2000.0);
        assert_eq!(result.actual_margin_percent, 50.0);
        assert_eq!(result.profit, 1000.0);
    }

    #[test]
    fn test_down_and_up_by_hundreds() {
        let down = compute(1999.0, 0.0, RoundingMode::Down, RoundingUnit::Hundreds);
        assert_eq!(down.raw_price, 1999.0);
        assert_eq!(down.adjusted_price, 1900.0);
        assert!((down.actual_margin_percent - (-99.0 / 1900.0 * 100.0)).abs() < EPSILON);

        let up = compute(1999.0, 0.0, RoundingMode::Up, RoundingUnit::Hundreds);
        assert_eq!(up.adjusted_price, 2000.0);
        assert_eq!(up.profit, 1.0);
    }

    #[test]
    fn test_rounding_changes_actual_margin() {
        // 690 / 0.7 = 985.71..., snapped up to 990
        let result = compute(690.0, 30.0, RoundingMode::Up, RoundingUnit::Tens);
        assert!((result.raw_price - 985.714_285_714).abs() < 1e-6);
        assert_eq!(result.adjusted_price, 990.0);
        assert_eq!(result.profit, 300.0);
        assert!((result.actual_margin_percent - 300.0 / 990.0 * 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_cost_zero_margin_is_all_zero() {
        for unit in RoundingUnit::ALL {
            for mode in RoundingMode::SELECTABLE {
                let result = compute(0.0, 0.0, mode, unit);
                assert_eq!(result.adjusted_price, 0.0);
                assert_eq!(result.actual_margin_percent, 0.0);
                assert_eq!(result.profit, 0.0);
                assert!(result.profit.is_sign_positive(), "profit must not be -0");
            }
        }
    }

    #[test]
    fn test_price_rounded_to_zero_loses_cost() {
        let result = compute(0.4, 0.0, RoundingMode::Nearest, RoundingUnit::Ones);
        assert_eq!(result.adjusted_price, 0.0);
        assert_eq!(result.actual_margin_percent, 0.0);
        assert_eq!(result.profit, -0.4);

        let result = compute(40.0, 10.0, RoundingMode::Down, RoundingUnit::Hundreds);
        assert_eq!(result.adjusted_price, 0.0);
        assert_eq!(result.profit, -40.0);
    }

    #[test]
    fn test_passthrough_keeps_raw_price() {
        let result = compute(100.0, 20.0, RoundingMode::Passthrough, RoundingUnit::Thousands);
        assert_eq!(result.raw_price, 125.0);
        assert_eq!(result.adjusted_price, 125.0);
        assert_eq!(result.actual_margin_percent, 20.0);
        assert_eq!(result.profit, 25.0);
    }

    #[test]
    fn test_margin_of_100_is_division_error() {
        let input = PricingInput::new(100.0, 100.0, RoundingMode::Nearest, RoundingUnit::Ones);
        let err = compute_price(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionError);
    }

    #[test]
    fn test_raw_price_guards_division() {
        assert_eq!(raw_price(100.0, 100.0).unwrap_err().kind(), ErrorKind::DivisionError);
        assert_eq!(raw_price(100.0, 20.0).unwrap(), 125.0);
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        for margin in [0.0, 50.0, 99.0, 100.0, 150.0] {
            let input = PricingInput::new(-5.0, margin, RoundingMode::Nearest, RoundingUnit::Ones);
            assert_eq!(compute_price(&input).unwrap_err().kind(), ErrorKind::InvalidCost);
        }
    }

    #[test]
    fn test_out_of_range_margin_is_rejected() {
        for margin in [-1.0, 100.01, 250.0, f64::NEG_INFINITY] {
            let input = PricingInput::new(10.0, margin, RoundingMode::Nearest, RoundingUnit::Ones);
            assert_eq!(compute_price(&input).unwrap_err().kind(), ErrorKind::InvalidMargin);
        }
    }

    #[test]
    fn test_price_too_large_is_overflow() {
        let input = PricingInput::new(1e308, 50.0, RoundingMode::Nearest, RoundingUnit::Ones);
        let err = compute_price(&input).unwrap_err();
        assert_eq!(
            err,
            PricingError::Overflow {
                cost: 1e308,
                margin_percent: 50.0
            }
        );
        assert_eq!(err.kind(), ErrorKind::Overflow);

        let input = PricingInput::new(
            1e300,
            99.999_999_999_999_99,
            RoundingMode::Up,
            RoundingUnit::Thousands,
        );
        assert_eq!(compute_price(&input).unwrap_err().kind(), ErrorKind::Overflow);
    }
}
