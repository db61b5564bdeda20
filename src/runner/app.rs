//! Application bootstrap and the REPL loop.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::runner::dispatch::{Dispatcher, Reply};
use crate::runner::ds::value::Value;
use crate::runner::history::{CsvHistory, HistoryError, SharedHistory};
use crate::runner::plugin::catalog::PluginCatalog;
use crate::runner::plugin::discovery::{DiscoveryReport, PluginDiscovery};
use crate::runner::plugin::registry::CommandRegistry;
use crate::runner::settings::Settings;
use crate::runner::std_lib::register_core_commands;

pub const PROMPT: &str = ">>> ";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not open history: {0}")]
    History(#[from] HistoryError),
}

/// A fully initialised calculator: built-ins and plugins registered.
pub struct App {
    settings: Settings,
    dispatcher: Dispatcher,
    discovery: DiscoveryReport,
}

impl App {
    /// Open the CSV history named in `settings` and initialise the app with
    /// the bundled plugin catalog.
    pub fn bootstrap(settings: Settings) -> Result<Self, AppError> {
        let history = CsvHistory::shared(&settings.history_file)?;
        Ok(Self::with_history(settings, history, PluginCatalog::with_bundled()))
    }

    /// Register the built-ins, then every plugin found under the plugin dir.
    pub fn with_history(settings: Settings, history: SharedHistory, catalog: PluginCatalog) -> Self {
        let mut registry = CommandRegistry::new();
        register_core_commands(&mut registry, history.clone());

        let discovery = PluginDiscovery::new(settings.plugin_dir.clone(), catalog);
        let report = discovery.discover(&mut registry);
        info!(
            environment = %settings.environment(),
            commands = ?registry.names(),
            "Registered commands"
        );

        App {
            settings,
            dispatcher: Dispatcher::new(registry, history),
            discovery: report,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn discovery_report(&self) -> &DiscoveryReport {
        &self.discovery
    }

    /// Run a single line, as the REPL would.
    pub fn eval(&self, line: &str) -> Reply {
        self.dispatcher.dispatch(line)
    }

    /// Read lines from `input` until an exit word or end of input, writing
    /// prompts and replies to `output`.
    pub fn run_repl<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        info!("Application started. Type 'exit' to exit.");
        writeln!(output, "tally - type 'menu' to list commands, 'exit' to quit.")?;

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                info!("End of input, exiting.");
                writeln!(output)?;
                break;
            }

            match self.dispatcher.dispatch(&line) {
                Reply::Exit => {
                    info!("Application exit.");
                    break;
                }
                Reply::Empty | Reply::Output(Value::Unit) => {}
                reply => writeln!(output, "{}", reply)?,
            }
        }

        Ok(())
    }
}
