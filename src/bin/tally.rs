//! CLI wrapper for the tally calculator.
//!
//! Usage:
//!   tally                        # Start REPL (interactive mode)
//!   tally -e "add 2 3"           # Run a single command line
//!   tally --plugins DIR          # Discover plugins under DIR
//!   tally --history FILE         # Keep history in FILE

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tally::runner::app::App;
use tally::runner::dispatch::Reply;
use tally::runner::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Pluggable command-line calculator")]
struct Cli {
    /// Directory scanned for plugin units (overrides TALLY_PLUGIN_DIR).
    #[arg(long, value_name = "DIR")]
    plugins: Option<PathBuf>,

    /// CSV file holding the calculation history (overrides TALLY_HISTORY_FILE).
    #[arg(long, value_name = "FILE")]
    history: Option<PathBuf>,

    /// Run one command line and exit instead of starting the REPL.
    #[arg(short = 'e', long = "eval", value_name = "LINE")]
    eval: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env().context("failed to load .env")?;
    if let Some(dir) = cli.plugins {
        settings = settings.with_plugin_dir(dir);
    }
    if let Some(file) = cli.history {
        settings = settings.with_history_file(file);
    }

    init_logging(&settings)?;

    ctrlc::set_handler(|| {
        info!("Application interrupted and exiting gracefully.");
        process::exit(0);
    })
    .context("failed to install interrupt handler")?;

    let app = App::bootstrap(settings)?;

    match cli.eval {
        Some(line) => eval_line(&app, &line),
        None => {
            let stdin = io::stdin();
            app.run_repl(stdin.lock(), io::stdout())
                .context("error reading input")
        }
    }
}

fn eval_line(app: &App, line: &str) -> anyhow::Result<()> {
    match app.eval(line) {
        Reply::Failure(e) => {
            eprintln!("{}", Reply::Failure(e));
            process::exit(1);
        }
        Reply::Empty | Reply::Exit => {}
        reply => println!("{}", reply),
    }
    Ok(())
}

/// Log to stderr, or append to `TALLY_LOG_FILE` when it is set. The filter
/// comes from `TALLY_LOG`, then `RUST_LOG`, then defaults to `info`.
fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let filter = settings
        .get("TALLY_LOG")
        .or_else(|| settings.get("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.get("TALLY_LOG_FILE") {
        Some(path) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .init();
        }
        None => builder.with_writer(io::stderr).init(),
    }

    info!("Logging configured.");
    Ok(())
}
