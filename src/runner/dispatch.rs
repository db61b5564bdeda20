//! Line dispatcher: the REPL's use of the command registry.
//!
//! One input line is split into a command name and raw tokens, the command is
//! run through the registry, and numeric results are appended to history.
//! Every failure is turned into a [`Reply`]; nothing here ends the process
//! except the reserved exit words.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, error};

use crate::parser::CommandLineParser;
use crate::runner::ds::error::CommandError;
use crate::runner::ds::value::Value;
use crate::runner::history::SharedHistory;
use crate::runner::plugin::registry::CommandRegistry;

lazy_static! {
    static ref EXIT_WORDS: HashSet<&'static str> = ["exit", "quit"].iter().copied().collect();
}

/// What the REPL should do after one line.
#[derive(Debug)]
pub enum Reply {
    /// Blank line, nothing to show.
    Empty,
    /// The user asked to leave.
    Exit,
    /// The command succeeded.
    Output(Value),
    /// The line could not be run; the REPL keeps going.
    Failure(CommandError),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Empty | Reply::Exit => Ok(()),
            Reply::Output(Value::Number(n)) => write!(f, "Result: {}", Value::Number(*n)),
            Reply::Output(value) => write!(f, "{}", value),
            Reply::Failure(e @ CommandError::UnknownCommand(_)) => write!(f, "{}", e),
            Reply::Failure(e) if e.is_usage() => write!(f, "{}", e),
            Reply::Failure(e) => write!(f, "Error: {}", e),
        }
    }
}

/// Routes input lines to registered commands.
pub struct Dispatcher {
    registry: CommandRegistry,
    history: SharedHistory,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, history: SharedHistory) -> Self {
        Dispatcher { registry, history }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    /// Handle one line of user input.
    pub fn dispatch(&self, line: &str) -> Reply {
        let command_line = match CommandLineParser::parse_line(line) {
            Ok(Some(command_line)) => command_line,
            Ok(None) => return Reply::Empty,
            Err(e) => {
                error!("unparsable input: {}", e);
                return Reply::Failure(CommandError::Syntax(e.to_string()));
            }
        };

        if command_line.args.is_empty()
            && EXIT_WORDS.contains(command_line.name.to_lowercase().as_str())
        {
            return Reply::Exit;
        }

        debug!(command = %command_line.name, args = ?command_line.args, "dispatching");
        match self.registry.execute(&command_line.name, &command_line.args) {
            Ok(value) => {
                if let Some(result) = value.as_number() {
                    self.record(&command_line.name, &command_line.args, result);
                }
                Reply::Output(value)
            }
            Err(e) => Reply::Failure(e),
        }
    }

    fn record(&self, command: &str, raw_args: &[String], result: f64) {
        if let Err(e) = self
            .history
            .borrow_mut()
            .save_operation(command, raw_args, result)
        {
            error!(command = %command, "failed to save history: {}", e);
        }
    }
}
