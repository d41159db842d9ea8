//! # pricewise-core: Pure Pricing Logic for Pricewise
//!
//! This crate is the **heart** of Pricewise. It turns a cost and a target
//! margin into a suggested selling price, snapped to a rounding policy, and
//! reports what the rounding did to the margin and profit.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricewise Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal Shell (apps/terminal)                  │   │
//! │  │     cost field, margin field, mode, unit ──► calc / clear       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PricingInput                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pricewise-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ rounding  │  │  pricing  │  │ validation│  │   │
//! │  │   │  Input    │  │ Nearest   │  │ compute_  │  │  parse_   │  │   │
//! │  │   │  Result   │  │ Down / Up │  │  price    │  │  input    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PricingInput, PricingResult, RoundingMode, RoundingUnit)
//! - [`rounding`] - Snapping a price to a rounding unit
//! - [`pricing`] - The price / margin / profit calculation
//! - [`validation`] - Parsing and range checks for raw form text
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pricewise_core::{compute_price, PricingInput, RoundingMode, RoundingUnit};
//!
//! let input = PricingInput::new(1000.0, 50.0, RoundingMode::Nearest, RoundingUnit::Ones);
//! let result = compute_price(&input).unwrap();
//!
//! assert_eq!(result.raw_price, 2000.0);
//! assert_eq!(result.adjusted_price, 2000.0);
//! assert_eq!(result.actual_margin_percent, 50.0);
//! assert_eq!(result.profit, 1000.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, PricingError, ValidationError};
pub use pricing::compute_price;
pub use rounding::round_to_unit;
pub use types::*;
pub use validation::parse_input;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound (exclusive) for the target margin, in percent.
///
/// At 100% the pricing formula divides by zero: no selling price can
/// leave the whole price as profit.
pub const MAX_MARGIN_PERCENT: f64 = 100.0;

/// Lower bound (inclusive) for the target margin, in percent.
pub const MIN_MARGIN_PERCENT: f64 = 0.0;
