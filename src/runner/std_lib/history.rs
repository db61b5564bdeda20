//! History-management built-ins.
//!
//! These commands hold a handle on the shared history store; the registry
//! treats them like any other command.

use crate::runner::ds::error::CommandError;
use crate::runner::ds::value::Value;
use crate::runner::history::{render_table, SharedHistory};
use crate::runner::plugin::registry::CommandRegistry;
use crate::runner::plugin::types::Command;

/// Register `history`, `clear` and `delhis` against `history`.
pub fn register(registry: &mut CommandRegistry, history: SharedHistory) {
    registry.register("history", Box::new(HistoryCommand::new(history.clone())));
    registry.register("clear", Box::new(ClearHistoryCommand::new(history.clone())));
    registry.register("delhis", Box::new(DeleteHistoryCommand::new(history)));
}

/// Show the recorded calculations.
pub struct HistoryCommand {
    history: SharedHistory,
}

impl HistoryCommand {
    pub fn new(history: SharedHistory) -> Self {
        HistoryCommand { history }
    }
}

impl Command for HistoryCommand {
    fn execute(&self, _args: &[f64]) -> Result<Value, CommandError> {
        let history = self.history.borrow();
        let entries = history.get_history();
        if entries.is_empty() {
            return Ok(Value::from("No history available."));
        }
        Ok(Value::Text(render_table(entries)))
    }
}

/// Drop every recorded calculation.
pub struct ClearHistoryCommand {
    history: SharedHistory,
}

impl ClearHistoryCommand {
    pub fn new(history: SharedHistory) -> Self {
        ClearHistoryCommand { history }
    }
}

impl Command for ClearHistoryCommand {
    fn execute(&self, _args: &[f64]) -> Result<Value, CommandError> {
        self.history.borrow_mut().clear_history()?;
        Ok(Value::from("Calculation history cleared."))
    }
}

/// Delete one calculation by its zero-based position.
pub struct DeleteHistoryCommand {
    history: SharedHistory,
}

impl DeleteHistoryCommand {
    pub fn new(history: SharedHistory) -> Self {
        DeleteHistoryCommand { history }
    }
}

impl Command for DeleteHistoryCommand {
    fn execute(&self, args: &[f64]) -> Result<Value, CommandError> {
        let raw_index = match args {
            [n] => *n,
            _ => {
                return Err(CommandError::ArityMismatch {
                    command: "delhis".to_string(),
                    expected: 1,
                    got: args.len(),
                })
            }
        };
        if raw_index < 0.0
            || raw_index.fract() != 0.0
            || !raw_index.is_finite()
            || raw_index >= usize::MAX as f64
        {
            return Err(CommandError::InvalidIndex(raw_index));
        }
        let index = raw_index as usize;

        if self.history.borrow_mut().delete_entry(index)? {
            Ok(Value::Text(format!("Deleted history entry {}.", index)))
        } else {
            Ok(Value::Text(format!("No history entry at index {}.", index)))
        }
    }
}
