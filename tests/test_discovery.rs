//! Tests for plugin discovery over real directory trees.

extern crate tally;

use std::fs;
use std::path::Path;

use tally::runner::ds::error::CommandError;
use tally::runner::ds::value::Value;
use tally::runner::plugin::catalog::PluginCatalog;
use tally::runner::plugin::discovery::{DiscoveryReport, PluginDiscovery, PluginError};
use tally::runner::plugin::registry::CommandRegistry;
use tally::runner::plugin::types::Command;
use tally::runner::std_lib::arithmetic;

/// Always answers with the same number.
struct ConstCommand<const N: i32>;

impl<const N: i32> Command for ConstCommand<N> {
    fn execute(&self, _args: &[f64]) -> Result<Value, CommandError> {
        Ok(Value::Number(N as f64))
    }
}

fn write_plugin(root: &Path, name: &str, manifest: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("plugin.toml"), manifest).unwrap();
}

fn discover(root: &Path, catalog: PluginCatalog) -> (CommandRegistry, DiscoveryReport) {
    let mut registry = CommandRegistry::new();
    let report = PluginDiscovery::new(root, catalog).discover(&mut registry);
    (registry, report)
}

// ── Happy path ───────────────────────────────────────────────────────

#[test]
fn test_registers_plugin_under_directory_name() {
    let root = tempfile::tempdir().unwrap();
    write_plugin(root.path(), "hello", "[plugin]\nexports = [\"GreetCommand\"]\n");

    let (registry, report) = discover(root.path(), PluginCatalog::with_bundled());

    assert_eq!(report.loaded_names(), vec!["hello"]);
    assert!(report.failures.is_empty());
    assert_eq!(
        registry.execute("hello", &[] as &[&str]).unwrap(),
        Value::from("Hello, World!")
    );
    assert!(!registry.contains("GreetCommand"));
}

#[test]
fn test_bundled_plugins_directory() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("plugins");
    let (registry, report) = discover(&root, PluginCatalog::with_bundled());

    assert_eq!(report.loaded_names(), vec!["greet", "mean"]);
    assert_eq!(registry.execute("mean", &["2", "4"]).unwrap(), Value::Number(3.0));
}

#[test]
fn test_plugin_metadata_is_reported() {
    let root = tempfile::tempdir().unwrap();
    write_plugin(
        root.path(),
        "avg",
        "[plugin]\nversion = \"1.2.0\"\nexports = [\"MeanCommand\"]\n",
    );

    let (_, report) = discover(root.path(), PluginCatalog::with_bundled());

    let info = &report.loaded[0];
    assert_eq!(info.name, "avg");
    assert_eq!(info.version.as_deref(), Some("1.2.0"));
    assert_eq!(info.provides, vec!["MeanCommand".to_string()]);
}

// ── Failure isolation ────────────────────────────────────────────────

#[test]
fn test_broken_plugin_does_not_stop_the_others() {
    let root = tempfile::tempdir().unwrap();
    write_plugin(root.path(), "broken", "[plugin\nexports = ");
    write_plugin(root.path(), "greet", "[plugin]\nexports = [\"GreetCommand\"]\n");

    let (registry, report) = discover(root.path(), PluginCatalog::with_bundled());

    assert_eq!(report.loaded_names(), vec!["greet"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].plugin, "broken");
    assert!(matches!(report.failures[0].error, PluginError::Manifest(_)));
    assert_eq!(registry.names(), vec!["greet".to_string()]);
}

#[test]
fn test_unresolved_symbol_fails_whole_unit() {
    let root = tempfile::tempdir().unwrap();
    write_plugin(
        root.path(),
        "partial",
        "[plugin]\nexports = [\"GreetCommand\", \"MissingCommand\"]\n",
    );

    let (registry, report) = discover(root.path(), PluginCatalog::with_bundled());

    assert!(registry.is_empty());
    assert_eq!(report.failures.len(), 1);
    match &report.failures[0].error {
        PluginError::UnresolvedSymbol(symbol) => assert_eq!(symbol, "MissingCommand"),
        other => panic!("expected UnresolvedSymbol, got {:?}", other),
    }
}

#[test]
fn test_empty_exports_is_a_load_failure() {
    let root = tempfile::tempdir().unwrap();
    write_plugin(root.path(), "hollow", "[plugin]\nexports = []\n");

    let (registry, report) = discover(root.path(), PluginCatalog::with_bundled());

    assert!(registry.is_empty());
    assert!(matches!(report.failures[0].error, PluginError::NoExports));
}

// ── What counts as a plugin unit ─────────────────────────────────────

#[test]
fn test_missing_root_is_not_an_error() {
    let root = tempfile::tempdir().unwrap();
    let (registry, report) = discover(&root.path().join("nope"), PluginCatalog::with_bundled());

    assert!(registry.is_empty());
    assert!(report.loaded.is_empty());
    assert!(report.failures.is_empty());
}

#[test]
fn test_unreadable_root_means_no_plugins() {
    let root = tempfile::NamedTempFile::new().unwrap();
    let (registry, report) = discover(root.path(), PluginCatalog::with_bundled());

    assert!(registry.is_empty());
    assert!(report.loaded.is_empty());
    assert!(report.failures.is_empty());
}

#[test]
fn test_files_and_plain_directories_are_ignored() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("square.toml"), "[plugin]\nexports = [\"GreetCommand\"]\n").unwrap();
    fs::create_dir_all(root.path().join("not_a_plugin")).unwrap();
    fs::write(root.path().join("not_a_plugin").join("README"), "hi").unwrap();

    let (registry, report) = discover(root.path(), PluginCatalog::with_bundled());

    assert!(registry.is_empty());
    assert!(report.loaded.is_empty());
    assert!(report.failures.is_empty());
}

#[test]
fn test_disabled_plugin_is_skipped() {
    let root = tempfile::tempdir().unwrap();
    write_plugin(
        root.path(),
        "greet",
        "[plugin]\nenabled = false\nexports = [\"GreetCommand\"]\n",
    );

    let (registry, report) = discover(root.path(), PluginCatalog::with_bundled());

    assert!(!registry.contains("greet"));
    assert_eq!(report.skipped, vec!["greet".to_string()]);
}

// ── Collisions ───────────────────────────────────────────────────────

#[test]
fn test_last_export_wins_within_a_plugin() {
    let root = tempfile::tempdir().unwrap();
    write_plugin(
        root.path(),
        "pick",
        "[plugin]\nexports = [\"One\", \"Two\"]\n",
    );
    let mut catalog = PluginCatalog::new();
    catalog.provide("One", || Box::new(ConstCommand::<1>));
    catalog.provide("Two", || Box::new(ConstCommand::<2>));

    let (registry, _) = discover(root.path(), catalog);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.execute("pick", &[] as &[&str]).unwrap(), Value::Number(2.0));
}

#[test]
fn test_plugin_replaces_builtin_of_the_same_name() {
    let root = tempfile::tempdir().unwrap();
    write_plugin(root.path(), "add", "[plugin]\nexports = [\"Seven\"]\n");
    let mut catalog = PluginCatalog::new();
    catalog.provide("Seven", || Box::new(ConstCommand::<7>));

    let mut registry = CommandRegistry::new();
    arithmetic::register(&mut registry);
    PluginDiscovery::new(root.path(), catalog).discover(&mut registry);

    assert_eq!(registry.execute("add", &["1", "1"]).unwrap(), Value::Number(7.0));
    assert_eq!(registry.names()[0], "add");
}
