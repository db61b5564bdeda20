//! Command registry and plugin architecture.
//!
//! ## Key Components
//!
//! - **[`Command`]**: trait every executable unit implements
//! - **[`CommandRegistry`]**: name to command mapping with argument coercion
//! - **[`PluginCatalog`]**: factory lookup by symbol name
//! - **[`PluginDiscovery`]**: registers commands from plugin units on disk
//!
//! ## Startup Order
//!
//! 1. Built-in commands are registered directly on the registry
//! 2. Discovery walks the plugin root and registers each loadable unit's
//!    commands under the unit's directory name
//! 3. The registry is only read from then on
//!
//! Because plugin commands are registered after the built-ins, a plugin unit
//! named like a built-in replaces it.
//!
//! ## Example: Discovering Plugins
//!
//! ```no_run
//! use tally::runner::plugin::{CommandRegistry, PluginCatalog, PluginDiscovery};
//!
//! let mut registry = CommandRegistry::new();
//! let discovery = PluginDiscovery::new("plugins", PluginCatalog::with_bundled());
//! let report = discovery.discover(&mut registry);
//! println!("loaded: {:?}", report.loaded_names());
//! ```

pub mod types;
pub mod registry;
pub mod catalog;
pub mod config;
pub mod discovery;

pub use types::{Command, CommandFactory, CommandIndex, PluginInfo};
pub use registry::CommandRegistry;
pub use catalog::PluginCatalog;
pub use config::{PluginManifest, MANIFEST_FILE};
pub use discovery::{DiscoveryReport, PluginDiscovery, PluginError, PluginLoadFailure};
