//! Plugin discovery: extend the registry from plugin units on disk.
//!
//! A plugin unit is a directory directly under the plugin root that contains
//! a [`MANIFEST_FILE`]. Its directory name is the command name; the manifest
//! lists the catalog symbols it exports.
//!
//! ```text
//! plugins/
//! ├── greet/plugin.toml     exports = ["GreetCommand"]  -> command `greet`
//! ├── mean/plugin.toml      exports = ["MeanCommand"]   -> command `mean`
//! └── notes.txt             (not a plugin unit, ignored)
//! ```
//!
//! Each unit is loaded on its own. A unit that fails to load is logged,
//! recorded in the [`DiscoveryReport`] and skipped; the rest still load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::catalog::PluginCatalog;
use super::config::{PluginManifest, MANIFEST_FILE};
use super::registry::CommandRegistry;
use super::types::{CommandFactory, PluginInfo};

/// Error type for loading a single plugin unit.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The manifest could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The manifest is not valid TOML or does not have the expected shape.
    #[error("Invalid plugin manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    /// The manifest's export list is empty.
    #[error("Plugin manifest exports no commands")]
    NoExports,

    /// An exported symbol has no factory in the catalog.
    #[error("Unresolved symbol: {0}")]
    UnresolvedSymbol(String),
}

/// A plugin unit that could not be loaded.
#[derive(Debug)]
pub struct PluginLoadFailure {
    pub plugin: String,
    pub error: PluginError,
}

/// Outcome of one discovery pass.
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Plugins whose commands were registered.
    pub loaded: Vec<PluginInfo>,
    /// Plugins disabled through their manifest.
    pub skipped: Vec<String>,
    /// Plugins that failed to load.
    pub failures: Vec<PluginLoadFailure>,
}

impl DiscoveryReport {
    pub fn loaded_names(&self) -> Vec<&str> {
        self.loaded.iter().map(|p| p.name.as_str()).collect()
    }
}

/// A loaded plugin unit, ready to be registered.
struct PluginDescriptor {
    info: PluginInfo,
    factories: Vec<(String, CommandFactory)>,
}

/// Scans a plugin root and registers the commands found there.
pub struct PluginDiscovery {
    root: PathBuf,
    catalog: PluginCatalog,
}

impl PluginDiscovery {
    pub fn new(root: impl Into<PathBuf>, catalog: PluginCatalog) -> Self {
        PluginDiscovery {
            root: root.into(),
            catalog,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the plugin root and register every loadable plugin unit's commands
    /// under the unit's name.
    ///
    /// A missing or unreadable root means no plugins; it is never an error.
    pub fn discover(&self, registry: &mut CommandRegistry) -> DiscoveryReport {
        let mut report = DiscoveryReport::default();

        if !self.root.exists() {
            warn!(root = %self.root.display(), "plugins directory not found");
            return report;
        }

        let units = match self.plugin_units() {
            Ok(units) => units,
            Err(e) => {
                warn!(root = %self.root.display(), "plugins directory not readable: {}", e);
                return report;
            }
        };

        for (name, dir) in units {
            match self.load_unit(&name, &dir) {
                Ok(Some(descriptor)) => {
                    register_descriptor(descriptor, registry, &mut report);
                }
                Ok(None) => {
                    info!(plugin = %name, "plugin disabled, skipping");
                    report.skipped.push(name);
                }
                Err(e) => {
                    error!(plugin = %name, "Error loading plugin {}: {}", name, e);
                    report.failures.push(PluginLoadFailure {
                        plugin: name,
                        error: e,
                    });
                }
            }
        }

        info!(
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "plugin discovery finished"
        );
        report
    }

    /// Immediate sub-directories of the root that carry a manifest, sorted by
    /// name.
    fn plugin_units(&self) -> io::Result<Vec<(String, PathBuf)>> {
        let mut units = vec![];
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            if !path.join(MANIFEST_FILE).is_file() {
                debug!(path = %path.display(), "directory has no {}, not a plugin", MANIFEST_FILE);
                continue;
            }
            match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => units.push((name.to_string(), path.clone())),
                None => warn!(path = %path.display(), "plugin directory name is not valid UTF-8"),
            }
        }
        units.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(units)
    }

    /// Load one plugin unit: read its manifest and resolve every export.
    ///
    /// Returns `Ok(None)` for a disabled plugin. Resolution is all-or-nothing,
    /// so a unit with any unknown symbol registers nothing.
    fn load_unit(&self, name: &str, dir: &Path) -> Result<Option<PluginDescriptor>, PluginError> {
        let manifest = PluginManifest::load(dir)?;
        if !manifest.is_enabled() {
            return Ok(None);
        }

        let factories = manifest
            .exports()
            .iter()
            .map(|symbol| {
                self.catalog
                    .resolve(symbol)
                    .map(|factory| (symbol.clone(), factory))
                    .ok_or_else(|| PluginError::UnresolvedSymbol(symbol.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let info = PluginInfo::new(name)
            .with_version(manifest.plugin.version.clone())
            .with_provides(manifest.exports().to_vec());

        Ok(Some(PluginDescriptor { info, factories }))
    }
}

fn register_descriptor(
    descriptor: PluginDescriptor,
    registry: &mut CommandRegistry,
    report: &mut DiscoveryReport,
) {
    let PluginDescriptor { info, factories } = descriptor;
    if factories.len() > 1 {
        warn!(
            plugin = %info.name,
            exports = ?info.provides,
            "plugin exports several commands under one name, the last one wins"
        );
    }
    for (symbol, factory) in factories {
        registry.register(info.name.clone(), factory());
        info!(plugin = %info.name, symbol = %symbol, "Command '{}' from plugin '{}' registered.", info.name, info.name);
    }
    report.loaded.push(info);
}
