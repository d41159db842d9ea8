//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`)
//! 2. Environment variables (`PRICEWISE_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default tracing filter when neither `RUST_LOG` nor `PRICEWISE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,pricewise=info";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol shown in front of prices.
    pub currency_symbol: String,

    /// How one-shot results are printed.
    pub output_format: OutputFormat,

    /// Tracing filter directive (e.g. `"debug"`).
    pub log_filter: String,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Four-line human-readable block.
    #[default]
    Text,

    /// `CalculationResponse` / `ApiError` as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "PRICEWISE_OUTPUT".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

impl Default for ConfigState {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - Currency symbol: ¥
    /// - Output: text
    /// - Logging: warnings, plus info from this app
    fn default() -> Self {
        ConfigState {
            currency_symbol: "¥".to_string(),
            output_format: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PRICEWISE_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `PRICEWISE_OUTPUT`: `text` or `json`
    /// - `PRICEWISE_LOG`: Tracing filter (`RUST_LOG` still wins)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("PRICEWISE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(output) = lookup("PRICEWISE_OUTPUT") {
            config.output_format = output.parse()?;
        }

        if let Some(filter) = lookup("PRICEWISE_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }

    /// Formats an amount as a currency string with thousands separators.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_terminal::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234.5, 2), "¥1,234.50");
    /// assert_eq!(config.format_currency(-99.0, 0), "-¥99");
    /// ```
    pub fn format_currency(&self, amount: f64, decimals: usize) -> String {
        let (negative, digits) = group_digits(amount, decimals);
        format!(
            "{}{}{}",
            if negative { "-" } else { "" },
            self.currency_symbol,
            digits
        )
    }

    /// Formats a percentage with two decimals, e.g. `"-5.21 %"`.
    pub fn format_percent(&self, percent: f64) -> String {
        let (negative, digits) = group_digits(percent, 2);
        format!("{}{} %", if negative { "-" } else { "" }, digits)
    }
}

/// Formats `|value|` with `decimals` places and comma-grouped thousands.
///
/// Returns whether a minus sign is needed; values that round to zero are
/// never negative.
fn group_digits(value: f64, decimals: usize) -> (bool, String) {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, frac) = match formatted.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    (value < 0.0 && !is_zero, grouped)
}
