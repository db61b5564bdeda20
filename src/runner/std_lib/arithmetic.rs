//! Arithmetic built-ins.

use crate::runner::ds::error::CommandError;
use crate::runner::ds::value::Value;
use crate::runner::plugin::registry::CommandRegistry;
use crate::runner::plugin::types::Command;

/// Register the arithmetic commands with the registry.
pub fn register(registry: &mut CommandRegistry) {
    registry.register("add", Box::new(AddCommand));
    registry.register("sub", Box::new(SubtractCommand));
    registry.register("mul", Box::new(MultiplyCommand));
    registry.register("div", Box::new(DivideCommand));
    registry.register("square", Box::new(SquareCommand));
}

/// Sum of all arguments; `0` for none.
pub struct AddCommand;

impl Command for AddCommand {
    fn execute(&self, args: &[f64]) -> Result<Value, CommandError> {
        Ok(Value::Number(args.iter().fold(0.0, |acc, n| acc + n)))
    }
}

/// First argument minus each of the rest, in order.
pub struct SubtractCommand;

impl Command for SubtractCommand {
    fn execute(&self, args: &[f64]) -> Result<Value, CommandError> {
        let (first, rest) = split_first(args, "sub")?;
        Ok(Value::Number(rest.iter().fold(first, |acc, n| acc - n)))
    }
}

/// Product of all arguments; `1` for none.
pub struct MultiplyCommand;

impl Command for MultiplyCommand {
    fn execute(&self, args: &[f64]) -> Result<Value, CommandError> {
        Ok(Value::Number(args.iter().product()))
    }
}

/// First argument divided by each of the rest, in order.
///
/// Every divisor is checked for zero before any division takes place.
pub struct DivideCommand;

impl Command for DivideCommand {
    fn execute(&self, args: &[f64]) -> Result<Value, CommandError> {
        let (first, rest) = split_first(args, "div")?;
        if rest.iter().any(|n| *n == 0.0) {
            return Err(CommandError::DivisionByZero);
        }
        Ok(Value::Number(rest.iter().fold(first, |acc, n| acc / n)))
    }
}

/// Square of exactly one argument.
pub struct SquareCommand;

impl Command for SquareCommand {
    fn execute(&self, args: &[f64]) -> Result<Value, CommandError> {
        match args {
            [n] => Ok(Value::Number(n * n)),
            _ => Err(CommandError::ArityMismatch {
                command: "square".to_string(),
                expected: 1,
                got: args.len(),
            }),
        }
    }
}

fn split_first<'a>(args: &'a [f64], command: &str) -> Result<(f64, &'a [f64]), CommandError> {
    args.split_first()
        .map(|(first, rest)| (*first, rest))
        .ok_or_else(|| CommandError::InsufficientArguments {
            command: command.to_string(),
            required: 1,
        })
}
