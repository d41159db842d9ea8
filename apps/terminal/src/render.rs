//! # Rendering
//!
//! Text rendering for results, alerts and the form itself.
//!
//! ```text
//! Selling price (calculated): ¥1,999.00     ← 2 decimals
//! Selling price (adjusted):   ¥1,900        ← 0 decimals
//! Final margin:               -5.21 %       ← 2 decimals
//! Profit:                     -¥99          ← 0 decimals
//! ```

use pricewise_core::PricingResult;

use crate::error::ApiError;
use crate::state::{ConfigState, Field, FormState, Tone};

/// Renders a calculation result as the four-line result block.
pub fn render_result(result: &PricingResult, config: &ConfigState) -> String {
    format!(
        "Selling price (calculated): {}\n\
         Selling price (adjusted):   {}\n\
         Final margin:               {}\n\
         Profit:                     {}",
        config.format_currency(result.raw_price, 2),
        config.format_currency(result.adjusted_price, 0),
        config.format_percent(result.actual_margin_percent),
        config.format_currency(result.profit, 0),
    )
}

/// Renders an error as a boxed alert.
///
/// ```text
/// ┌─ Input error ──────────────────────────┐
/// │ Invalid cost: cost must be 0 or greater │
/// └────────────────────────────────────────┘
/// ```
pub fn render_alert(err: &ApiError) -> String {
    let lines: Vec<&str> = err.message.lines().collect();
    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(err.title.chars().count() + 2))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let title_fill = width + 2 - (err.title.chars().count() + 3);
    out.push_str(&format!("┌─ {} {}┐\n", err.title, "─".repeat(title_fill)));
    for line in &lines {
        let pad = width - line.chars().count();
        out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("└{}┘", "─".repeat(width + 2)));
    out
}

/// Renders the whole form, marking the focused field.
pub fn render_form(form: &FormState) -> String {
    let marker = |field: Field| if form.focus == field { ">" } else { " " };
    let tone = match form.result.tone {
        Tone::Normal => "",
        Tone::Success => " [ok]",
        Tone::Error => " [error]",
    };

    format!(
        "{} Cost:          {}\n\
         {} Margin (%):    {}\n\
         \x20 Rounding:      {} ({})\n\
         \x20 Rounding unit: {} ({})\n\
         \x20 {}{}",
        marker(Field::Cost),
        form.cost_text,
        marker(Field::Margin),
        form.margin_text,
        form.rounding_mode.label(),
        form.rounding_mode,
        form.rounding_unit,
        form.rounding_unit.label(),
        form.result.text,
        tone,
    )
}
