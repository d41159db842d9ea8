//! # Pricing Commands
//!
//! The two form actions: calculate and clear.
//!
//! ## Calculate Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_price(form, config)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  form.to_input()  ── parse + validate (pricewise-core)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_price()  ── raw / adjusted / margin / profit                   │
//! │       │                                                                 │
//! │       ├── Ok  → label = result block (Success)  → CalculationResponse   │
//! │       └── Err → label = "Selling price: error"  → ApiError              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pricewise_core::{compute_price, PricingInput, PricingResult};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::render::render_result;
use crate::state::{ConfigState, FormState};

/// Response of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub input: PricingInput,
    pub result: PricingResult,

    /// The rendered result block, as shown in the result label.
    pub display: String,
}

/// Calculates the selling price from the current form contents.
///
/// On success the result label shows the rendered block; on failure it
/// switches to the error text and the error is returned for the alert.
pub fn calculate_price(
    form: &mut FormState,
    config: &ConfigState,
) -> Result<CalculationResponse, ApiError> {
    debug!(
        cost = %form.cost_text,
        margin = %form.margin_text,
        mode = %form.rounding_mode,
        unit = %form.rounding_unit,
        "calculate_price command"
    );

    let outcome = form
        .to_input()
        .and_then(|input| compute_price(&input).map(|result| (input, result)));

    match outcome {
        Ok((input, result)) => {
            let display = render_result(&result, config);
            form.show_result(display.clone());
            debug!(
                raw_price = result.raw_price,
                adjusted_price = result.adjusted_price,
                "price calculated"
            );
            Ok(CalculationResponse {
                input,
                result,
                display,
            })
        }
        Err(err) => {
            warn!(kind = ?err.kind(), "calculation rejected: {}", err);
            form.show_error();
            Err(err.into())
        }
    }
}

/// Resets the form and returns focus to the cost field.
pub fn clear_form(form: &mut FormState) {
    debug!("clear_form command");
    form.reset();
}
