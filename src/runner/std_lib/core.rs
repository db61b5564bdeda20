//! Core built-ins registration.
//!
//! This module provides the functions that register the built-in commands
//! with a [`CommandRegistry`] and the bundled plugin symbols with a
//! [`PluginCatalog`].

use tracing::info;

use crate::runner::history::SharedHistory;
use crate::runner::plugin::catalog::PluginCatalog;
use crate::runner::plugin::registry::CommandRegistry;

use super::arithmetic;
use super::greet;
use super::history;
use super::menu;
use super::statistics;

/// Register all built-in commands with the registry.
pub fn register_core_commands(registry: &mut CommandRegistry, history_store: SharedHistory) {
    arithmetic::register(registry);
    history::register(registry, history_store);
    menu::register(registry);
    info!(commands = ?registry.names(), "Calculator commands registered successfully.");
}

/// Make the bundled plugin command types available to plugin units.
pub fn register_bundled_symbols(catalog: &mut PluginCatalog) {
    greet::provide(catalog);
    statistics::provide(catalog);
}
