//! # Rounding Module
//!
//! Snaps a price to a rounding unit.
//!
//! ## How Snapping Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  round_to_unit(1999.0, Hundreds, mode)                                  │
//! │                                                                         │
//! │    quotient = 1999 / 100 = 19.99                                        │
//! │                                                                         │
//! │    Nearest:  round(19.99) = 20  → 2000                                  │
//! │    Down:     floor(19.99) = 19  → 1900                                  │
//! │    Up:       ceil(19.99)  = 20  → 2000                                  │
//! │    Passthrough:                 → 1999                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Nearest` rounds ties away from zero (`2.5 → 3`, `-2.5 → -3`), which is
//! what [`f64::round`] does.

use crate::types::{RoundingMode, RoundingUnit};

/// Rounds `value` to a multiple of `unit` according to `mode`.
///
/// Idempotent for every mode: rounding an already-rounded value returns it
/// unchanged.
///
/// ## Example
/// ```rust
/// use pricewise_core::{round_to_unit, RoundingMode, RoundingUnit};
///
/// assert_eq!(round_to_unit(1999.0, RoundingUnit::Hundreds, RoundingMode::Down), 1900.0);
/// assert_eq!(round_to_unit(1999.0, RoundingUnit::Hundreds, RoundingMode::Up), 2000.0);
/// assert_eq!(round_to_unit(761.9, RoundingUnit::Ones, RoundingMode::Nearest), 762.0);
/// ```
pub fn round_to_unit(value: f64, unit: RoundingUnit, mode: RoundingMode) -> f64 {
    let scale = unit.value();
    match mode {
        RoundingMode::Nearest => (value / scale).round() * scale,
        RoundingMode::Down => (value / scale).floor() * scale,
        RoundingMode::Up => (value / scale).ceil() * scale,
        RoundingMode::Passthrough => value,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_rounds_half_away_from_zero() {
        assert_eq!(round_to_unit(2.5, RoundingUnit::Ones, RoundingMode::Nearest), 3.0);
        assert_eq!(round_to_unit(3.5, RoundingUnit::Ones, RoundingMode::Nearest), 4.0);
        assert_eq!(round_to_unit(-2.5, RoundingUnit::Ones, RoundingMode::Nearest), -3.0);
        assert_eq!(round_to_unit(250.0, RoundingUnit::Hundreds, RoundingMode::Nearest), 300.0);
        assert_eq!(round_to_unit(249.0, RoundingUnit::Hundreds, RoundingMode::Nearest), 200.0);
    }

    #[test]
    fn test_down_and_up() {
        let unit = RoundingUnit::Hundreds;
        assert_eq!(round_to_unit(1999.0, unit, RoundingMode::Down), 1900.0);
        assert_eq!(round_to_unit(1999.0, unit, RoundingMode::Up), 2000.0);
        assert_eq!(round_to_unit(1901.0, unit, RoundingMode::Up), 2000.0);
        assert_eq!(round_to_unit(1900.0, unit, RoundingMode::Up), 1900.0);
    }

    #[test]
    fn test_thousands() {
        let unit = RoundingUnit::Thousands;
        assert_eq!(round_to_unit(12_345.0, unit, RoundingMode::Nearest), 12_000.0);
        assert_eq!(round_to_unit(12_345.0, unit, RoundingMode::Down), 12_000.0);
        assert_eq!(round_to_unit(12_345.0, unit, RoundingMode::Up), 13_000.0);
    }

    #[test]
    fn test_small_values_can_round_to_zero() {
        assert_eq!(round_to_unit(0.4, RoundingUnit::Ones, RoundingMode::Nearest), 0.0);
        assert_eq!(round_to_unit(9.0, RoundingUnit::Tens, RoundingMode::Down), 0.0);
        assert_eq!(round_to_unit(0.1, RoundingUnit::Thousands, RoundingMode::Up), 1000.0);
    }

    #[test]
    fn test_passthrough_leaves_value_alone() {
        for unit in RoundingUnit::ALL {
            assert_eq!(round_to_unit(1234.567, unit, RoundingMode::Passthrough), 1234.567);
        }
    }

    #[test]
    fn test_rounding_twice_is_stable() {
        for unit in RoundingUnit::ALL {
            for mode in RoundingMode::SELECTABLE {
                let once = round_to_unit(98_765.4321, unit, mode);
                assert_eq!(round_to_unit(once, unit, mode), once, "{mode} / {unit}");
            }
        }
    }
}
