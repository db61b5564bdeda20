//! # tally - pluggable command-line calculator
//!
//! A small REPL calculator whose command set is extended at startup by
//! plugin discovery:
//! - pest grammar for splitting input lines into a command and its arguments
//! - a name-keyed command registry with argument coercion
//! - directory-based plugin units resolved through a factory catalog
//! - CSV-backed calculation history
//!
//! ## Quick Start
//!
//! ### Running a command through the registry
//!
//! ```
//! use tally::runner::plugin::registry::CommandRegistry;
//! use tally::runner::std_lib::arithmetic::AddCommand;
//! use tally::runner::ds::value::Value;
//!
//! let mut registry = CommandRegistry::new();
//! registry.register("add", Box::new(AddCommand));
//!
//! let result = registry.execute("add", &["2", "3", "4"]).unwrap();
//! assert_eq!(result, Value::Number(9.0));
//! ```
//!
//! ### Writing a plugin command
//!
//! A plugin command implements [`Command`](runner::plugin::types::Command) and
//! exposes a factory under a symbol name. A plugin unit on disk is a directory
//! with a `plugin.toml` naming the symbols it exports; the directory name
//! becomes the command name.
//!
//! ```
//! use tally::runner::ds::error::CommandError;
//! use tally::runner::ds::value::Value;
//! use tally::runner::plugin::catalog::PluginCatalog;
//! use tally::runner::plugin::registry::CommandRegistry;
//! use tally::runner::plugin::types::Command;
//!
//! struct TripleCommand;
//!
//! impl Command for TripleCommand {
//!     fn execute(&self, args: &[f64]) -> Result<Value, CommandError> {
//!         match args {
//!             [n] => Ok(Value::Number(n * 3.0)),
//!             _ => Err(CommandError::ArityMismatch {
//!                 command: "triple".to_string(),
//!                 expected: 1,
//!                 got: args.len(),
//!             }),
//!         }
//!     }
//! }
//!
//! let mut catalog = PluginCatalog::new();
//! catalog.provide("TripleCommand", || Box::new(TripleCommand));
//!
//! let factory = catalog.resolve("TripleCommand").unwrap();
//! let mut registry = CommandRegistry::new();
//! registry.register("triple", factory());
//! assert_eq!(registry.execute("triple", &["7"]).unwrap(), Value::Number(21.0));
//! ```
//!
//! ## Architecture
//!
//! - **[`parser`]** - pest grammar for REPL input lines
//! - **[`runner`]** - everything that runs commands
//!   - **[`runner::plugin`]** - command trait, registry, catalog and discovery
//!   - **[`runner::std_lib`]** - built-in and bundled plugin commands
//!   - **[`runner::history`]** - calculation history stores
//!   - **[`runner::dispatch`]** - line dispatcher used by the REPL
//!   - **[`runner::app`]** - bootstrap and REPL loop

#[macro_use]
extern crate lazy_static;

pub mod parser;
pub mod runner;
