//! # Domain Types
//!
//! Core domain types used throughout Pricewise.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────────┐      │
//! │  │    PricingInput      │  compute   │    PricingResult         │      │
//! │  │  ──────────────────  │  ───────►  │  ──────────────────────  │      │
//! │  │  cost                │            │  raw_price               │      │
//! │  │  margin_percent      │            │  adjusted_price          │      │
//! │  │  rounding_mode       │            │  actual_margin_percent   │      │
//! │  │  rounding_unit       │            │  profit                  │      │
//! │  └──────────────────────┘            └──────────────────────────┘      │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────────┐      │
//! │  │    RoundingMode      │            │    RoundingUnit          │      │
//! │  │  Nearest / Down / Up │            │  1 / 10 / 100 / 1000     │      │
//! │  │  Passthrough         │            │                          │      │
//! │  └──────────────────────┘            └──────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither input nor result has identity: each result is transient and is
//! recomputed whenever the user asks for a calculation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Rounding Mode
// =============================================================================

/// How the theoretical price is snapped to the rounding unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round half away from zero.
    #[default]
    Nearest,
    /// Floor.
    Down,
    /// Ceiling.
    Up,
    /// Leave the price untouched.
    ///
    /// Selected when the boundary receives a mode name it does not know.
    Passthrough,
}

impl RoundingMode {
    /// The modes a user can pick from the form.
    pub const SELECTABLE: [RoundingMode; 3] =
        [RoundingMode::Nearest, RoundingMode::Down, RoundingMode::Up];

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::Nearest => "nearest",
            RoundingMode::Down => "down",
            RoundingMode::Up => "up",
            RoundingMode::Passthrough => "passthrough",
        }
    }

    /// Human-readable label for the form.
    pub const fn label(&self) -> &'static str {
        match self {
            RoundingMode::Nearest => "Round half up",
            RoundingMode::Down => "Round down",
            RoundingMode::Up => "Round up",
            RoundingMode::Passthrough => "No rounding",
        }
    }

    /// Parses a mode name, mapping anything unrecognized to
    /// [`RoundingMode::Passthrough`].
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::from_name_lenient("ceil"), RoundingMode::Up);
    /// assert_eq!(RoundingMode::from_name_lenient("banker"), RoundingMode::Passthrough);
    /// ```
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or(RoundingMode::Passthrough)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a rounding mode or unit name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what}: '{value}'")]
pub struct UnknownChoice {
    pub what: &'static str,
    pub value: String,
}

impl FromStr for RoundingMode {
    type Err = UnknownChoice;

    /// Accepts the canonical names plus the `round` / `floor` / `ceil` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "round" => Ok(RoundingMode::Nearest),
            "down" | "floor" => Ok(RoundingMode::Down),
            "up" | "ceil" => Ok(RoundingMode::Up),
            "passthrough" | "none" => Ok(RoundingMode::Passthrough),
            _ => Err(UnknownChoice {
                what: "rounding mode",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Rounding Unit
// =============================================================================

/// The digit granularity a price is snapped to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RoundingUnit {
    #[default]
    Ones,
    Tens,
    Hundreds,
    Thousands,
}

impl RoundingUnit {
    /// All units, smallest first.
    pub const ALL: [RoundingUnit; 4] = [
        RoundingUnit::Ones,
        RoundingUnit::Tens,
        RoundingUnit::Hundreds,
        RoundingUnit::Thousands,
    ];

    /// The unit as an integer (1, 10, 100 or 1000).
    pub const fn as_u32(&self) -> u32 {
        match self {
            RoundingUnit::Ones => 1,
            RoundingUnit::Tens => 10,
            RoundingUnit::Hundreds => 100,
            RoundingUnit::Thousands => 1000,
        }
    }

    /// The unit as a float, for arithmetic.
    #[inline]
    pub fn value(&self) -> f64 {
        f64::from(self.as_u32())
    }

    /// Human-readable label for the form.
    pub const fn label(&self) -> &'static str {
        match self {
            RoundingUnit::Ones => "ones",
            RoundingUnit::Tens => "tens",
            RoundingUnit::Hundreds => "hundreds",
            RoundingUnit::Thousands => "thousands",
        }
    }
}

impl TryFrom<u32> for RoundingUnit {
    type Error = UnknownChoice;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RoundingUnit::Ones),
            10 => Ok(RoundingUnit::Tens),
            100 => Ok(RoundingUnit::Hundreds),
            1000 => Ok(RoundingUnit::Thousands),
            other => Err(UnknownChoice {
                what: "rounding unit",
                value: other.to_string(),
            }),
        }
    }
}

impl From<RoundingUnit> for u32 {
    fn from(unit: RoundingUnit) -> Self {
        unit.as_u32()
    }
}

impl FromStr for RoundingUnit {
    type Err = UnknownChoice;

    /// Accepts the integer value (`"100"`) or the label (`"hundreds"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<u32>() {
            return RoundingUnit::try_from(value);
        }

        RoundingUnit::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownChoice {
                what: "rounding unit",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for RoundingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

// =============================================================================
// Pricing Input / Result
// =============================================================================

/// Everything the calculator needs, captured from the form at the moment
/// "calculate" fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    /// Purchase cost. Must be zero or greater.
    pub cost: f64,

    /// Target margin relative to the selling price, in `[0, 100)`.
    pub margin_percent: f64,

    pub rounding_mode: RoundingMode,

    pub rounding_unit: RoundingUnit,
}

impl PricingInput {
    pub fn new(
        cost: f64,
        margin_percent: f64,
        rounding_mode: RoundingMode,
        rounding_unit: RoundingUnit,
    ) -> Self {
        PricingInput {
            cost,
            margin_percent,
            rounding_mode,
            rounding_unit,
        }
    }
}

/// Output of a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Unrounded theoretical price: `cost / (1 - margin / 100)`.
    pub raw_price: f64,

    /// `raw_price` snapped to the rounding unit.
    pub adjusted_price: f64,

    /// Margin after rounding, in percent.
    pub actual_margin_percent: f64,

    /// `adjusted_price - cost`.
    pub profit: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
