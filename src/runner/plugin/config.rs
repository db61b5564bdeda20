//! Plugin manifest (`plugin.toml`) parsing.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::discovery::PluginError;

/// File that marks a directory as a plugin unit.
pub const MANIFEST_FILE: &str = "plugin.toml";

/// Contents of a plugin unit's manifest.
///
/// Expected format:
/// ```toml
/// [plugin]
/// description = "Arithmetic mean"
/// version = "0.1.0"
/// enabled = true
/// exports = ["MeanCommand"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginManifest {
    pub plugin: PluginSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginSection {
    /// Human-readable summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Plugin version.
    #[serde(default)]
    pub version: Option<String>,
    /// Whether the plugin should be registered.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Catalog symbols of the command types this plugin exports.
    pub exports: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

impl PluginManifest {
    /// Load the manifest from a plugin unit directory.
    pub fn load(plugin_dir: &Path) -> Result<Self, PluginError> {
        let path = plugin_dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|source| PluginError::Io {
            path: path.clone(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from a TOML string.
    pub fn parse(content: &str) -> Result<Self, PluginError> {
        let manifest: PluginManifest = toml::from_str(content)?;
        if manifest.plugin.exports.is_empty() {
            return Err(PluginError::NoExports);
        }
        Ok(manifest)
    }

    pub fn exports(&self) -> &[String] {
        &self.plugin.exports
    }

    pub fn is_enabled(&self) -> bool {
        self.plugin.enabled
    }
}
