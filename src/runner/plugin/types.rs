//! Core types for the command and plugin architecture.

use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::error::CommandError;
use crate::runner::ds::value::Value;

/// A unit of work invoked by name from the REPL.
///
/// Arguments arrive already coerced to `f64` by the registry. A command
/// validates its own arity and reports domain faults through
/// [`CommandError`]; the registry passes those through untouched.
pub trait Command {
    fn execute(&self, args: &[f64]) -> Result<Value, CommandError>;
}

/// Factory a plugin exposes for each command type it exports.
///
/// Factories take no arguments: a plugin command must be constructible
/// without any state beyond what it builds for itself.
pub type CommandFactory = fn() -> Box<dyn Command>;

/// Shared, registration-ordered list of command names.
///
/// The registry owns the commands, so a command that needs to enumerate its
/// siblings (the menu) holds this handle instead of the registry itself.
#[derive(Debug, Clone, Default)]
pub struct CommandIndex {
    names: Rc<RefCell<Vec<String>>>,
}

impl CommandIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`, keeping its original position if it is already known.
    pub fn insert(&self, name: &str) {
        let mut names = self.names.borrow_mut();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.borrow().iter().any(|n| n == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.names.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.names.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.borrow().is_empty()
    }
}

/// Plugin metadata, built while a plugin unit is being loaded.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    /// Plugin name, taken from the plugin unit's directory name.
    pub name: String,

    /// Plugin version, if the manifest declares one.
    pub version: Option<String>,

    /// Symbols of the command types this plugin exports.
    pub provides: Vec<String>,
}

impl PluginInfo {
    pub fn new(name: impl Into<String>) -> Self {
        PluginInfo {
            name: name.into(),
            version: None,
            provides: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn with_provides(mut self, provides: Vec<String>) -> Self {
        self.provides = provides;
        self
    }
}
