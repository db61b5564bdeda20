use thiserror::Error;

use crate::runner::history::HistoryError;

/// Failures surfaced by the registry or by a command.
///
/// None of these end the process; the dispatcher renders them and the REPL
/// moves on to the next line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A raw token could not be coerced to a number.
    #[error("Invalid input: Arguments must be numbers. Got: {raw:?}")]
    InvalidArgument { raw: Vec<String> },

    #[error("Usage: {command} takes exactly {expected} argument(s), got {got}")]
    ArityMismatch {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("Usage: {command} needs at least {required} argument(s)")]
    InsufficientArguments { command: String, required: usize },

    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("Index must be a non-negative whole number, got {0}")]
    InvalidIndex(f64),

    /// Carries the command-line parser's error. The grammar accepts any
    /// whitespace-separated tokens, so well-formed UTF-8 input never hits it.
    #[error("Could not read command line: {0}")]
    Syntax(String),

    #[error(transparent)]
    History(#[from] HistoryError),
}

impl CommandError {
    /// Usage-style failures are the command's own precondition checks.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CommandError::ArityMismatch { .. } | CommandError::InsufficientArguments { .. }
        )
    }
}
