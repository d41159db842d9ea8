//! # Pricewise Entry Point
//!
//! Parses arguments and hands over to [`pricewise_terminal::run`].

use std::process::ExitCode;

use clap::Parser;
use pricewise_terminal::cli::Cli;

fn main() -> ExitCode {
    pricewise_terminal::run(Cli::parse())
}
