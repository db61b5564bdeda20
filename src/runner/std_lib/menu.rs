//! The `menu` built-in: list every registered command.

use crate::runner::ds::error::CommandError;
use crate::runner::ds::value::Value;
use crate::runner::plugin::registry::CommandRegistry;
use crate::runner::plugin::types::{Command, CommandIndex};

/// Register `menu` with a view onto the registry's own names.
pub fn register(registry: &mut CommandRegistry) {
    let index = registry.index();
    registry.register("menu", Box::new(MenuCommand::new(index)));
}

pub struct MenuCommand {
    index: CommandIndex,
}

impl MenuCommand {
    pub fn new(index: CommandIndex) -> Self {
        MenuCommand { index }
    }
}

impl Command for MenuCommand {
    fn execute(&self, _args: &[f64]) -> Result<Value, CommandError> {
        let listing = self
            .index
            .names()
            .iter()
            .map(|name| format!(" - {}", name))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Value::Text(format!("Available Commands:\n{}", listing)))
    }
}
