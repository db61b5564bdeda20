//! Environment-driven settings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const PLUGIN_DIR_VAR: &str = "TALLY_PLUGIN_DIR";
pub const HISTORY_FILE_VAR: &str = "TALLY_HISTORY_FILE";
pub const ENVIRONMENT_VAR: &str = "TALLY_ENVIRONMENT";

const DEFAULT_PLUGIN_DIR: &str = "plugins";
const DEFAULT_HISTORY_FILE: &str = "data/history.csv";
const DEFAULT_ENVIRONMENT: &str = "PRODUCTION";

/// Process settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root directory scanned for plugin units.
    pub plugin_dir: PathBuf,
    /// CSV file backing the calculation history.
    pub history_file: PathBuf,
    /// Every variable seen at startup, `TALLY_ENVIRONMENT` defaulted.
    vars: BTreeMap<String, String>,
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    ///
    /// A malformed `.env` is an error; a missing one is not.
    pub fn from_env() -> Result<Self, dotenvy::Error> {
        tolerate_missing(dotenvy::dotenv())?;
        Ok(Self::from_vars(std::env::vars()))
    }

    /// Like [`Settings::from_env`], reading the dotenv file at `path`.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        tolerate_missing(dotenvy::from_path(path.as_ref()))?;
        Ok(Self::from_vars(std::env::vars()))
    }

    /// Build settings from an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: BTreeMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        vars.entry(ENVIRONMENT_VAR.to_string())
            .or_insert_with(|| DEFAULT_ENVIRONMENT.to_string());

        let plugin_dir = vars
            .get(PLUGIN_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLUGIN_DIR));
        let history_file = vars
            .get(HISTORY_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));

        Settings {
            plugin_dir,
            history_file,
            vars,
        }
    }

    pub fn with_plugin_dir(mut self, plugin_dir: impl Into<PathBuf>) -> Self {
        self.plugin_dir = plugin_dir.into();
        self
    }

    pub fn with_history_file(mut self, history_file: impl Into<PathBuf>) -> Self {
        self.history_file = history_file.into();
        self
    }

    /// Value of an environment variable captured at startup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn environment(&self) -> &str {
        self.get(ENVIRONMENT_VAR).unwrap_or(DEFAULT_ENVIRONMENT)
    }
}

fn tolerate_missing<T>(loaded: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_vars(Vec::<(String, String)>::new())
    }
}
