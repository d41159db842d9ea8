//! # State Module
//!
//! Application state for the terminal shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │       FormState          │      │      ConfigState         │        │
//! │  │                          │      │                          │        │
//! │  │  cost / margin text      │      │  currency symbol         │        │
//! │  │  rounding mode / unit    │      │  output format           │        │
//! │  │  result label + tone     │      │  log filter              │        │
//! │  │  focused field           │      │                          │        │
//! │  └──────────────────────────┘      └──────────────────────────┘        │
//! │        mutated by commands              read-only after startup        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is single-threaded, so both are owned directly by the shell
//! loop and passed to commands by reference.

mod config;
mod form;

pub use config::{ConfigError, ConfigState, OutputFormat, DEFAULT_LOG_FILTER};
pub use form::{Field, FormState, ResultLabel, Tone, RESULT_ERROR, RESULT_PLACEHOLDER};
