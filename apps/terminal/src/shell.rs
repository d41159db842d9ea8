//! # Interactive Shell
//!
//! A prompt loop that plays the role of the pricing form.
//!
//! ## Session Example
//! ```text
//! pricewise [cost]> 1999
//! pricewise [margin]> 0
//! pricewise [cost]> mode down
//! pricewise [cost]> unit 100
//! pricewise [cost]> calc
//! Selling price (calculated): ¥1,999.00
//! Selling price (adjusted):   ¥1,900
//! Final margin:               -5.21 %
//! Profit:                     -¥99
//! pricewise [cost]> clear
//! ```
//!
//! A line that does not start with a command word is typed into the
//! focused field, and focus moves on to the next field.

use std::io::{self, BufRead, Write};

use pricewise_core::{RoundingMode, RoundingUnit};
use tracing::{debug, warn};

use crate::commands::{calculate_price, clear_form, get_config};
use crate::error::ApiError;
use crate::render::{render_alert, render_form};
use crate::state::{ConfigState, Field, FormState};

/// Help text printed by `help` and at startup.
pub const HELP: &str = "\
Commands:
  cost <value>      set the cost
  margin <value>    set the target margin in percent
  mode <name>       rounding mode: nearest, down, up
  unit <n>          rounding unit: 1, 10, 100, 1000
  calc              calculate the selling price
  clear             reset the form
  show              show the form
  config            show the configuration
  help              show this help
  quit              leave
Any other line is typed into the focused field.";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    SetText(Field, String),
    TypeIntoFocused(String),
    Mode(String),
    Unit(String),
    Calculate,
    Clear,
    Show,
    Config,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ApiError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "cost" => ShellCommand::SetText(Field::Cost, rest.to_string()),
            "margin" => ShellCommand::SetText(Field::Margin, rest.to_string()),
            "mode" => ShellCommand::Mode(required_arg("mode", rest)?),
            "unit" => ShellCommand::Unit(required_arg("unit", rest)?),
            "calc" | "calculate" => ShellCommand::Calculate,
            "clear" => ShellCommand::Clear,
            "show" => ShellCommand::Show,
            "config" => ShellCommand::Config,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            _ => ShellCommand::TypeIntoFocused(line.to_string()),
        };

        Ok(Some(command))
    }
}

fn required_arg(command: &str, rest: &str) -> Result<String, ApiError> {
    if rest.is_empty() {
        return Err(ApiError::invalid_command(format!(
            "'{}' needs a value, see 'help'",
            command
        )));
    }
    Ok(rest.to_string())
}

/// Maps a mode name to a [`RoundingMode`].
///
/// Unknown names select [`RoundingMode::Passthrough`] and come back with a
/// notice for the user.
pub fn resolve_mode(name: &str) -> (RoundingMode, Option<String>) {
    let mode = RoundingMode::from_name_lenient(name);
    let notice = name.parse::<RoundingMode>().err().map(|err| {
        warn!(%err, "unrecognized rounding mode, prices will not be rounded");
        format!("{}; prices will not be rounded", err)
    });
    (mode, notice)
}

/// Maps a unit name to a [`RoundingUnit`], falling back to ones.
pub fn resolve_unit(name: &str) -> (RoundingUnit, Option<String>) {
    match name.parse::<RoundingUnit>() {
        Ok(unit) => (unit, None),
        Err(err) => {
            warn!(%err, "unrecognized rounding unit, using 1");
            (RoundingUnit::default(), Some(format!("{}; using 1", err)))
        }
    }
}

/// Whether the loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive form, reading commands from `input` and writing to
/// `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    form: FormState,
    config: ConfigState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ConfigState) -> Self {
        Shell {
            input,
            output,
            form: FormState::new(),
            config,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Pricewise - selling price calculator")?;
        writeln!(self.output, "{}", HELP)?;

        let mut line = String::new();
        loop {
            write!(self.output, "pricewise [{}]> ", self.form.focus.label())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        debug!("shell finished");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match ShellCommand::parse(line) {
            Ok(Some(command)) => self.dispatch(command),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                self.alert(&err)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: ShellCommand) -> io::Result<Flow> {
        match command {
            ShellCommand::SetText(field, text) => {
                self.form.set_text(field, text);
                self.form.focus = field.next();
            }
            ShellCommand::TypeIntoFocused(text) => self.form.type_into_focused(text),
            ShellCommand::Mode(name) => {
                let (mode, notice) = resolve_mode(&name);
                self.form.rounding_mode = mode;
                self.notice(notice)?;
            }
            ShellCommand::Unit(name) => {
                let (unit, notice) = resolve_unit(&name);
                self.form.rounding_unit = unit;
                self.notice(notice)?;
            }
            ShellCommand::Calculate => match calculate_price(&mut self.form, &self.config) {
                Ok(response) => writeln!(self.output, "{}", response.display)?,
                Err(err) => {
                    self.alert(&err)?;
                    writeln!(self.output, "{}", self.form.result.text)?;
                }
            },
            ShellCommand::Clear => {
                clear_form(&mut self.form);
                writeln!(self.output, "{}", render_form(&self.form))?;
            }
            ShellCommand::Show => writeln!(self.output, "{}", render_form(&self.form))?,
            ShellCommand::Config => {
                let config = get_config(&self.config);
                match serde_json::to_string_pretty(&config) {
                    Ok(json) => writeln!(self.output, "{}", json)?,
                    Err(err) => self.alert(&ApiError::from(err))?,
                }
            }
            ShellCommand::Help => writeln!(self.output, "{}", HELP)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn alert(&mut self, err: &ApiError) -> io::Result<()> {
        writeln!(self.output, "{}", render_alert(err))
    }

    fn notice(&mut self, notice: Option<String>) -> io::Result<()> {
        match notice {
            Some(text) => writeln!(self.output, "note: {}", text),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Tone, RESULT_ERROR};
    use std::io::Cursor;

    fn run_session(script: &str) -> (FormState, String) {
        let mut shell = Shell::new(Cursor::new(script.to_string()), Vec::new(), ConfigState::default());
        shell.run().unwrap();
        let form = shell.form().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (form, output)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
        assert_eq!(
            ShellCommand::parse("cost 1000").unwrap(),
            Some(ShellCommand::SetText(Field::Cost, "1000".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("MARGIN  12.5 ").unwrap(),
            Some(ShellCommand::SetText(Field::Margin, "12.5".to_string()))
        );
        assert_eq!(ShellCommand::parse("calc").unwrap(), Some(ShellCommand::Calculate));
        assert_eq!(
            ShellCommand::parse("42").unwrap(),
            Some(ShellCommand::TypeIntoFocused("42".to_string()))
        );
        assert!(ShellCommand::parse("mode").is_err());
    }

    #[test]
    fn test_resolve_mode_and_unit() {
        assert_eq!(resolve_mode("floor"), (RoundingMode::Down, None));
        let (mode, notice) = resolve_mode("bankers");
        assert_eq!(mode, RoundingMode::Passthrough);
        assert!(notice.unwrap().contains("prices will not be rounded"));

        assert_eq!(resolve_unit("1000"), (RoundingUnit::Thousands, None));
        let (unit, notice) = resolve_unit("7");
        assert_eq!(unit, RoundingUnit::Ones);
        assert!(notice.is_some());
    }

    #[test]
    fn test_session_calculates_with_rounding() {
        let (form, output) = run_session("1999\n0\nmode down\nunit 100\ncalc\nquit\n");

        assert_eq!(form.rounding_mode, RoundingMode::Down);
        assert_eq!(form.result.tone, Tone::Success);
        assert!(output.contains("Selling price (adjusted):   ¥1,900"));
        assert!(output.contains("Profit:                     -¥99"));
    }

    #[test]
    fn test_session_reports_errors_and_keeps_running() {
        let (form, output) = run_session("cost -5\nmargin 10\ncalc\ncost 100\ncalc\n");

        assert!(output.contains("Input error"));
        assert!(output.contains(RESULT_ERROR));
        assert!(output.contains("Selling price (adjusted):   ¥111"));
        assert_eq!(form.result.tone, Tone::Success);
    }

    #[test]
    fn test_session_division_error() {
        let (_, output) = run_session("cost 100\nmargin 100\ncalc\n");
        assert!(output.contains("Calculation error"));
    }

    #[test]
    fn test_session_clear_returns_focus_to_cost() {
        let (form, output) = run_session("cost 5\nmode up\nunit 10\nclear\n");

        assert_eq!(form, FormState::default());
        assert!(output.ends_with("pricewise [cost]> \n"));
    }

    #[test]
    fn test_session_stops_at_end_of_input() {
        let (_, output) = run_session("help\n");
        assert!(output.matches("Commands:").count() >= 2);
    }
}
