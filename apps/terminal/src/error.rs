//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Pricewise                              │
//! │                                                                         │
//! │  calc                                                                   │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  → Result<T, ApiError>                         │  │
//! │  │                                                                  │  │
//! │  │  Bad cost / margin? ── PricingError::Invalid* ──┐                │  │
//! │  │  Margin == 100?     ── PricingError::Division ──┤                │  │
//! │  │  Price overflow?    ── PricingError::Overflow ──┼──► ApiError ──►│  │
//! │  │  Terminal I/O?      ── io::Error ───────────────┘                │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Shell renders: alert box (title + message) + "Selling price: error"   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! In JSON mode the error is printed as:
//! ```json
//! {
//!   "code": "INVALID_MARGIN",
//!   "title": "Input error",
//!   "message": "Invalid margin: margin must be at least 0 and less than 100"
//! }
//! ```

use pricewise_core::{ErrorKind, PricingError};
use serde::Serialize;

use crate::state::ConfigError;

/// Error shown to the user when a command fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Alert title
    pub title: &'static str,

    /// Human-readable error message for display
    pub message: String,
}

/// Alert title for anything the user typed wrong.
pub const INPUT_ERROR_TITLE: &str = "Input error";

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Cost field missing, non-numeric or negative
    InvalidCost,

    /// Margin field missing, non-numeric or out of range
    InvalidMargin,

    /// Margin of exactly 100%
    DivisionError,

    /// Unrecognized shell command
    InvalidCommand,

    /// Bad `PRICEWISE_*` environment value
    InvalidConfig,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Title of the alert that reports this error.
    pub const fn title(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCost | ErrorCode::InvalidMargin | ErrorCode::InvalidCommand => {
                INPUT_ERROR_TITLE
            }
            ErrorCode::DivisionError => "Calculation error",
            ErrorCode::InvalidConfig => "Configuration error",
            ErrorCode::Internal => "Unexpected error",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            title: code.title(),
            message: message.into(),
        }
    }

    /// Creates an error for a shell line that is not a command.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts pricing errors to API errors.
///
/// Input errors get the input alert title; an overflow is reported as an
/// unexpected error.
impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        let kind = err.kind();
        let code = match kind {
            ErrorKind::InvalidCost => ErrorCode::InvalidCost,
            ErrorKind::InvalidMargin => ErrorCode::InvalidMargin,
            ErrorKind::DivisionError => ErrorCode::DivisionError,
            ErrorKind::Overflow => {
                tracing::error!("Price calculation overflowed: {}", err);
                ErrorCode::Internal
            }
        };
        let title = if kind.is_input_error() {
            INPUT_ERROR_TITLE
        } else {
            code.title()
        };

        ApiError {
            code,
            title,
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::InvalidConfig, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        ApiError::internal(format!("An unexpected error occurred: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization failed: {}", err);
        ApiError::internal(format!("An unexpected error occurred: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
