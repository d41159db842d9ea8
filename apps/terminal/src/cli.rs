//! Command-line interface definitions.

use clap::Parser;

/// Pricewise - suggest a selling price from a cost and a target margin.
///
/// Without `--cost` / `--margin` an interactive form is started.
#[derive(Parser, Debug, Clone)]
#[command(name = "pricewise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Purchase cost (runs a single calculation)
    #[arg(long, allow_hyphen_values = true)]
    pub cost: Option<String>,

    /// Target margin in percent, in [0, 100)
    #[arg(long, allow_hyphen_values = true)]
    pub margin: Option<String>,

    /// Rounding mode: nearest, down or up
    #[arg(long, default_value = "nearest")]
    pub mode: String,

    /// Rounding unit: 1, 10, 100 or 1000
    #[arg(long, default_value = "1")]
    pub unit: String,

    /// Print the result (or error) as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// True when cost or margin were given on the command line.
    pub fn is_one_shot(&self) -> bool {
        self.cost.is_some() || self.margin.is_some()
    }
}
