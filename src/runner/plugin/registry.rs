//! Command registry: the single source of truth for what commands exist.

use std::collections::HashMap;

use tracing::{debug, error, warn};

use super::types::{Command, CommandIndex};
use crate::runner::ds::error::CommandError;
use crate::runner::ds::value::Value;

/// Registry mapping command names to command instances.
///
/// Names are unique. Registering a name that is already bound replaces the
/// earlier command; the shadowed command is handed back to the caller.
pub struct CommandRegistry {
    /// All registered commands.
    commands: HashMap<String, Box<dyn Command>>,

    /// Names in registration order, shared with commands that list them.
    index: CommandIndex,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        CommandRegistry {
            commands: HashMap::new(),
            index: CommandIndex::new(),
        }
    }

    /// Bind `name` to `command`, returning the command it replaced, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        command: Box<dyn Command>,
    ) -> Option<Box<dyn Command>> {
        let name = name.into();
        self.index.insert(&name);
        let previous = self.commands.insert(name.clone(), command);
        if previous.is_some() {
            warn!(command = %name, "command re-registered, previous binding replaced");
        } else {
            debug!(command = %name, "command registered");
        }
        previous
    }

    /// Look up `name`, coerce every raw argument to `f64` and run the command.
    ///
    /// Errors raised by the command itself are returned unchanged.
    pub fn execute<S: AsRef<str>>(&self, name: &str, raw_args: &[S]) -> Result<Value, CommandError> {
        let command = self.commands.get(name).ok_or_else(|| {
            error!(command = %name, "unknown command");
            CommandError::UnknownCommand(name.to_string())
        })?;

        let args = coerce_args(raw_args).map_err(|e| {
            error!(command = %name, "{}", e);
            e
        })?;

        command.execute(&args)
    }

    /// Get a registered command by name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Check if a command is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, in the order they were first registered.
    pub fn names(&self) -> Vec<String> {
        self.index.names()
    }

    /// Shared handle onto the registered names.
    pub fn index(&self) -> CommandIndex {
        self.index.clone()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse every raw token as `f64`. On the first failure the whole argument
/// list is reported, exactly as typed.
pub fn coerce_args<S: AsRef<str>>(raw_args: &[S]) -> Result<Vec<f64>, CommandError> {
    raw_args
        .iter()
        .map(|raw| raw.as_ref().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| CommandError::InvalidArgument {
            raw: raw_args.iter().map(|raw| raw.as_ref().to_string()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_accepts_float_syntax() {
        let args = coerce_args(&["2", "-3.5", "1e2", ".5"]).unwrap();
        assert_eq!(args, vec![2.0, -3.5, 100.0, 0.5]);
    }

    #[test]
    fn test_coerce_reports_all_raw_tokens() {
        match coerce_args(&["1", "two", "3"]) {
            Err(CommandError::InvalidArgument { raw }) => {
                assert_eq!(raw, vec!["1", "two", "3"]);
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_coerce_empty() {
        let empty: [&str; 0] = [];
        assert!(coerce_args(&empty).unwrap().is_empty());
    }
}
