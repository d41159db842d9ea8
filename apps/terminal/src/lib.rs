//! # Pricewise Terminal Library
//!
//! The presentation shell for Pricewise: owns the form, calls the core,
//! renders results and errors.
//!
//! ## Module Organization
//! ```text
//! pricewise_terminal/
//! ├── lib.rs          ◄─── You are here (startup & one-shot mode)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── shell.rs        ◄─── Interactive prompt loop
//! ├── render.rs       ◄─── Result block, alert box, form view
//! ├── state/
//! │   ├── form.rs     ◄─── Form fields, result label, focus
//! │   └── config.rs   ◄─── Configuration + currency formatting
//! ├── commands/
//! │   ├── pricing.rs  ◄─── calculate_price, clear_form
//! │   └── config.rs   ◄─── get_config
//! └── error.rs        ◄─── ApiError shown in alerts
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (stderr)
//! 3. One-shot calculation if `--cost` / `--margin` were given,
//!    otherwise the interactive form

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use commands::calculate_price;
use error::ApiError;
use render::render_alert;
use shell::{resolve_mode, resolve_unit, Shell};
use state::{ConfigState, Field, FormState, OutputFormat};

/// Runs the application.
pub fn run(cli: Cli) -> ExitCode {
    let mut config = match ConfigState::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", render_alert(&ApiError::from(err)));
            return ExitCode::FAILURE;
        }
    };
    if cli.json {
        config.output_format = OutputFormat::Json;
    }

    init_tracing(&config);
    info!(one_shot = cli.is_one_shot(), "Starting Pricewise");

    if cli.is_one_shot() {
        let stdout = io::stdout();
        let stderr = io::stderr();
        return match run_once(&cli, &config, &mut stdout.lock(), &mut stderr.lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_alert(&ApiError::from(err)));
            ExitCode::FAILURE
        }
    }
}

/// Runs a single calculation from command-line arguments.
///
/// The result goes to `out`; in text mode errors and notices go to `err`,
/// in JSON mode the error object goes to `out` as well. The returned error
/// has already been printed.
pub fn run_once<O: Write, E: Write>(
    cli: &Cli,
    config: &ConfigState,
    out: &mut O,
    err: &mut E,
) -> Result<(), ApiError> {
    let mut form = FormState::new();
    form.set_text(Field::Cost, cli.cost.clone().unwrap_or_default());
    form.set_text(Field::Margin, cli.margin.clone().unwrap_or_default());

    let (mode, mode_notice) = resolve_mode(&cli.mode);
    let (unit, unit_notice) = resolve_unit(&cli.unit);
    form.rounding_mode = mode;
    form.rounding_unit = unit;
    for notice in mode_notice.into_iter().chain(unit_notice) {
        writeln!(err, "note: {}", notice)?;
    }

    match (calculate_price(&mut form, config), config.output_format) {
        (Ok(response), OutputFormat::Text) => writeln!(out, "{}", response.display)?,
        (Ok(response), OutputFormat::Json) => write_json(out, &response)?,
        (Err(api_err), OutputFormat::Text) => {
            writeln!(err, "{}", render_alert(&api_err))?;
            return Err(api_err);
        }
        (Err(api_err), OutputFormat::Json) => {
            write_json(out, &api_err)?;
            return Err(api_err);
        }
    }

    Ok(())
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - else `PRICEWISE_LOG` (via [`ConfigState::log_filter`])
/// - Default: warnings, plus info from this app
///
/// Logs go to stderr so they never mix with results on stdout.
fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn one_shot(args: &[&str], config: &ConfigState) -> (bool, String, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = run_once(&cli, config, &mut out, &mut err).is_ok();
        (
            ok,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_one_shot_text() {
        let (ok, out, err) = one_shot(
            &["pricewise", "--cost", "1000", "--margin", "50"],
            &ConfigState::default(),
        );
        assert!(ok);
        assert!(out.contains("Selling price (calculated): ¥2,000.00"));
        assert!(out.contains("Profit:                     ¥1,000"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_one_shot_json() {
        let mut config = ConfigState::default();
        config.output_format = OutputFormat::Json;
        let (ok, out, _) = one_shot(
            &["pricewise", "--cost", "1999", "--margin", "0", "--mode", "up", "--unit", "100"],
            &config,
        );
        assert!(ok);

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["result"]["adjustedPrice"], 2000.0);
        assert_eq!(json["input"]["roundingMode"], "up");
        assert_eq!(json["input"]["roundingUnit"], 100);
    }

    #[test]
    fn test_one_shot_error_text_goes_to_stderr() {
        let (ok, out, err) = one_shot(
            &["pricewise", "--cost", "-5", "--margin", "10"],
            &ConfigState::default(),
        );
        assert!(!ok);
        assert!(out.is_empty());
        assert!(err.contains("Input error"));
        assert!(err.contains("cost must be 0 or greater"));
    }

    #[test]
    fn test_one_shot_error_json() {
        let mut config = ConfigState::default();
        config.output_format = OutputFormat::Json;
        let (ok, out, _) = one_shot(&["pricewise", "--cost", "100", "--margin", "100"], &config);
        assert!(!ok);

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["code"], "DIVISION_ERROR");
    }

    #[test]
    fn test_one_shot_unknown_mode_passes_price_through() {
        let (ok, out, err) = one_shot(
            &["pricewise", "--cost", "100", "--margin", "20", "--mode", "sideways"],
            &ConfigState::default(),
        );
        assert!(ok);
        assert!(err.contains("unknown rounding mode"));
        assert!(out.contains("Selling price (adjusted):   ¥125"));
    }

    #[test]
    fn test_one_shot_missing_margin() {
        let (ok, _, err) = one_shot(&["pricewise", "--cost", "100"], &ConfigState::default());
        assert!(!ok);
        assert!(err.contains("margin is required"));
    }
}
