//! Bundled `GreetCommand` plugin symbol.

use tracing::info;

use crate::runner::ds::error::CommandError;
use crate::runner::ds::value::Value;
use crate::runner::plugin::catalog::PluginCatalog;
use crate::runner::plugin::types::Command;

pub fn provide(catalog: &mut PluginCatalog) {
    catalog.provide("GreetCommand", || Box::new(GreetCommand));
}

/// Says hello. Ignores its arguments.
pub struct GreetCommand;

impl Command for GreetCommand {
    fn execute(&self, _args: &[f64]) -> Result<Value, CommandError> {
        info!("Hello, World!");
        Ok(Value::from("Hello, World!"))
    }
}
