//! # Form State
//!
//! The mutable state behind the pricing form.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  calculate   ┌──────────┐                                │
//! │  │   Idle   │─────────────►│ Compute  │──┬──► Result shown (Success)   │
//! │  │ (typing) │              └──────────┘  └──► Error shown  (Error)     │
//! │  └──────────┘                                       │                  │
//! │       ▲                                             │                  │
//! │       └──────────────── clear ◄─────────────────────┘                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The form only stores what the user typed and picked. Turning that into
//! numbers and a price is the core's job ([`pricewise_core::parse_input`]).

use pricewise_core::{parse_input, PricingError, PricingInput, RoundingMode, RoundingUnit};

/// Text shown in the result label before any calculation.
pub const RESULT_PLACEHOLDER: &str = "Selling price: ";

/// Text shown in the result label after a failed calculation.
pub const RESULT_ERROR: &str = "Selling price: error";

/// The text fields that can hold input focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Cost,
    Margin,
}

impl Field {
    /// The field that receives focus after this one.
    pub fn next(self) -> Self {
        match self {
            Field::Cost => Field::Margin,
            Field::Margin => Field::Cost,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Cost => "cost",
            Field::Margin => "margin",
        }
    }
}

/// Colour of the result label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    Success,
    Error,
}

/// The result label under the buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultLabel {
    pub text: String,
    pub tone: Tone,
}

impl Default for ResultLabel {
    fn default() -> Self {
        ResultLabel {
            text: RESULT_PLACEHOLDER.to_string(),
            tone: Tone::Normal,
        }
    }
}

/// Everything the form shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Raw text of the cost field.
    pub cost_text: String,

    /// Raw text of the margin field.
    pub margin_text: String,

    pub rounding_mode: RoundingMode,

    pub rounding_unit: RoundingUnit,

    pub result: ResultLabel,

    /// Field that receives bare input.
    pub focus: Field,
}

impl FormState {
    pub fn new() -> Self {
        FormState::default()
    }

    /// Replaces the text of `field`.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        match field {
            Field::Cost => self.cost_text = text.into(),
            Field::Margin => self.margin_text = text.into(),
        }
    }

    /// Types into the focused field, then moves focus to the next one.
    pub fn type_into_focused(&mut self, text: impl Into<String>) {
        self.set_text(self.focus, text);
        self.focus = self.focus.next();
    }

    /// Snapshot of the form as a validated core input.
    pub fn to_input(&self) -> Result<PricingInput, PricingError> {
        parse_input(
            &self.cost_text,
            &self.margin_text,
            self.rounding_mode,
            self.rounding_unit,
        )
    }

    pub fn show_result(&mut self, text: impl Into<String>) {
        self.result = ResultLabel {
            text: text.into(),
            tone: Tone::Success,
        };
    }

    pub fn show_error(&mut self) {
        self.result = ResultLabel {
            text: RESULT_ERROR.to_string(),
            tone: Tone::Error,
        };
    }

    /// Resets every field to its default and focuses the cost field.
    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults() {
        let form = FormState::new();
        assert_eq!(form.cost_text, "");
        assert_eq!(form.margin_text, "");
        assert_eq!(form.rounding_mode, RoundingMode::Nearest);
        assert_eq!(form.rounding_unit, RoundingUnit::Ones);
        assert_eq!(form.result.text, RESULT_PLACEHOLDER);
        assert_eq!(form.result.tone, Tone::Normal);
        assert_eq!(form.focus, Field::Cost);
    }

    #[test]
    fn test_type_into_focused_advances_focus() {
        let mut form = FormState::new();
        form.type_into_focused("1000");
        assert_eq!(form.cost_text, "1000");
        assert_eq!(form.focus, Field::Margin);

        form.type_into_focused("50");
        assert_eq!(form.margin_text, "50");
        assert_eq!(form.focus, Field::Cost);
    }

    #[test]
    fn test_to_input_uses_core_validation() {
        let mut form = FormState::new();
        form.set_text(Field::Cost, "1999");
        form.set_text(Field::Margin, "0");
        form.rounding_mode = RoundingMode::Down;
        form.rounding_unit = RoundingUnit::Hundreds;

        let input = form.to_input().unwrap();
        assert_eq!(input.cost, 1999.0);
        assert_eq!(input.rounding_unit, RoundingUnit::Hundreds);

        form.set_text(Field::Cost, "abc");
        assert!(matches!(form.to_input(), Err(PricingError::InvalidCost(_))));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState::new();
        form.set_text(Field::Cost, "10");
        form.set_text(Field::Margin, "20");
        form.rounding_mode = RoundingMode::Up;
        form.rounding_unit = RoundingUnit::Thousands;
        form.focus = Field::Margin;
        form.show_error();

        form.reset();
        assert_eq!(form, FormState::default());
    }
}
