//! Bundled `MeanCommand` plugin symbol.

use crate::runner::ds::error::CommandError;
use crate::runner::ds::value::Value;
use crate::runner::plugin::catalog::PluginCatalog;
use crate::runner::plugin::types::Command;

pub fn provide(catalog: &mut PluginCatalog) {
    catalog.provide("MeanCommand", || Box::new(MeanCommand));
}

/// Arithmetic mean of the arguments.
pub struct MeanCommand;

impl Command for MeanCommand {
    fn execute(&self, args: &[f64]) -> Result<Value, CommandError> {
        if args.is_empty() {
            return Err(CommandError::InsufficientArguments {
                command: "mean".to_string(),
                required: 1,
            });
        }
        Ok(Value::Number(args.iter().sum::<f64>() / args.len() as f64))
    }
}
