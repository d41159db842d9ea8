//! # Commands Module
//!
//! All actions the shell can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── pricing.rs  ◄─── calculate_price, clear_form
//! └── config.rs   ◄─── get_config
//! ```
//!
//! Each command takes only the state it needs: pricing commands borrow the
//! form mutably and the configuration immutably.

pub mod config;
pub mod pricing;

pub use config::get_config;
pub use pricing::{calculate_price, clear_form, CalculationResponse};
