//! Plugin catalog: factory lookup by symbol name.
//!
//! Plugin code registers a factory for every command type it exports under a
//! symbol name (conventionally the type name, e.g. `"GreetCommand"`). Plugin
//! units on disk then refer to those symbols from their manifest, and
//! discovery resolves them here. No runtime type inspection is involved: a
//! symbol either has a factory or the plugin unit fails to load.

use std::collections::BTreeMap;

use super::types::CommandFactory;
use crate::runner::std_lib::register_bundled_symbols;

/// Symbol table of command factories available to plugin units.
#[derive(Default)]
pub struct PluginCatalog {
    factories: BTreeMap<String, CommandFactory>,
}

impl PluginCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        PluginCatalog {
            factories: BTreeMap::new(),
        }
    }

    /// Create a catalog holding the symbols of the plugins bundled with tally.
    pub fn with_bundled() -> Self {
        let mut catalog = Self::new();
        register_bundled_symbols(&mut catalog);
        catalog
    }

    /// Make `factory` available under `symbol`. A later call with the same
    /// symbol replaces the earlier factory.
    pub fn provide(&mut self, symbol: impl Into<String>, factory: CommandFactory) {
        self.factories.insert(symbol.into(), factory);
    }

    /// Find the factory exported under `symbol`.
    pub fn resolve(&self, symbol: &str) -> Option<CommandFactory> {
        self.factories.get(symbol).copied()
    }

    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.factories.contains_key(symbol)
    }

    /// All known symbols, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}
