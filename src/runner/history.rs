//! Calculation history.
//!
//! The dispatcher appends every numeric result to a [`HistoryStore`]; the
//! history commands read, clear and prune it. Entries are kept in invocation
//! order and addressed by zero-based position in the current list.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const HEADERS: [&str; 3] = ["Operation", "Operands", "Result"];

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History I/O error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("History file is malformed: {0}")]
    Csv(#[from] csv::Error),
}

/// One recorded calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "Operation")]
    pub operation: String,
    /// Raw argument tokens joined by a single space.
    #[serde(rename = "Operands")]
    pub operands: String,
    #[serde(rename = "Result")]
    pub result: f64,
}

impl HistoryEntry {
    pub fn new<S: AsRef<str>>(operation: &str, raw_args: &[S], result: f64) -> Self {
        HistoryEntry {
            operation: operation.to_string(),
            operands: raw_args
                .iter()
                .map(|a| a.as_ref())
                .collect::<Vec<_>>()
                .join(" "),
            result,
        }
    }
}

/// Append-only store of calculations, with positional deletion.
pub trait HistoryStore {
    fn save_operation(
        &mut self,
        command: &str,
        raw_args: &[String],
        result: f64,
    ) -> Result<(), HistoryError>;

    fn get_history(&self) -> &[HistoryEntry];

    fn clear_history(&mut self) -> Result<(), HistoryError>;

    /// Remove the entry at `index`. Returns `false` when there is none.
    fn delete_entry(&mut self, index: usize) -> Result<bool, HistoryError>;
}

/// History store shared between the dispatcher and the history commands.
pub type SharedHistory = Rc<RefCell<dyn HistoryStore>>;

/// History kept only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedHistory {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl HistoryStore for MemoryHistory {
    fn save_operation(
        &mut self,
        command: &str,
        raw_args: &[String],
        result: f64,
    ) -> Result<(), HistoryError> {
        self.entries.push(HistoryEntry::new(command, raw_args, result));
        Ok(())
    }

    fn get_history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        Ok(())
    }

    fn delete_entry(&mut self, index: usize) -> Result<bool, HistoryError> {
        if index >= self.entries.len() {
            return Ok(false);
        }
        self.entries.remove(index);
        Ok(true)
    }
}

/// History persisted to a CSV file, rewritten after every change.
#[derive(Debug)]
pub struct CsvHistory {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl CsvHistory {
    /// Open the history at `path`, loading it if the file already exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        let entries = if path.exists() {
            let mut reader = csv::Reader::from_path(&path)?;
            reader
                .deserialize()
                .collect::<Result<Vec<HistoryEntry>, csv::Error>>()?
        } else {
            vec![]
        };
        debug!(path = %path.display(), entries = entries.len(), "history loaded");
        Ok(CsvHistory { path, entries })
    }

    pub fn shared(path: impl Into<PathBuf>) -> Result<SharedHistory, HistoryError> {
        Ok(Rc::new(RefCell::new(Self::open(path)?)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| HistoryError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(&HEADERS)?;
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        writer.flush().map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl HistoryStore for CsvHistory {
    fn save_operation(
        &mut self,
        command: &str,
        raw_args: &[String],
        result: f64,
    ) -> Result<(), HistoryError> {
        self.entries.push(HistoryEntry::new(command, raw_args, result));
        self.persist()
    }

    fn get_history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.persist()
    }

    fn delete_entry(&mut self, index: usize) -> Result<bool, HistoryError> {
        if index >= self.entries.len() {
            return Ok(false);
        }
        self.entries.remove(index);
        self.persist()?;
        Ok(true)
    }
}

/// Render entries as an indexed, column-aligned table.
pub fn render_table(entries: &[HistoryEntry]) -> String {
    let rows: Vec<[String; 4]> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            [
                i.to_string(),
                e.operation.clone(),
                e.operands.clone(),
                format!("{:?}", e.result),
            ]
        })
        .collect();

    let header = [
        String::new(),
        HEADERS[0].to_string(),
        HEADERS[1].to_string(),
        HEADERS[2].to_string(),
    ];
    let mut widths = [0usize; 4];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(widths.iter())
                .map(|(cell, w)| format!("{:<width$}", cell, width = w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_memory_history_append_and_delete() {
        let mut history = MemoryHistory::new();
        history.save_operation("add", &args(&["2", "3"]), 5.0).unwrap();
        history.save_operation("mul", &args(&["2", "4"]), 8.0).unwrap();

        assert_eq!(history.get_history()[0].operands, "2 3");
        assert!(history.delete_entry(0).unwrap());
        assert!(!history.delete_entry(5).unwrap());
        assert_eq!(history.get_history().len(), 1);
        assert_eq!(history.get_history()[0].operation, "mul");
    }

    #[test]
    fn test_csv_history_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("history.csv");

        let mut history = CsvHistory::open(&path).unwrap();
        assert!(history.get_history().is_empty());
        history.save_operation("add", &args(&["2", "3"]), 5.0).unwrap();
        history.save_operation("div", &args(&["10", "4"]), 2.5).unwrap();

        let reopened = CsvHistory::open(&path).unwrap();
        assert_eq!(reopened.get_history(), history.get_history());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Operation,Operands,Result\n"));
    }

    #[test]
    fn test_csv_history_clear_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");

        let mut history = CsvHistory::open(&path).unwrap();
        history.save_operation("sub", &args(&["9", "1"]), 8.0).unwrap();
        history.clear_history().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Operation,Operands,Result\n"
        );
        assert!(CsvHistory::open(&path).unwrap().get_history().is_empty());
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let entries = vec![
            HistoryEntry::new("add", &["2", "3"], 5.0),
            HistoryEntry::new("div", &["10", "4"], 2.5),
        ];
        let table = render_table(&entries);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   Operation  Operands  Result");
        assert_eq!(lines[1], "0  add        2 3       5.0");
        assert_eq!(lines[2], "1  div        10 4      2.5");
    }
}
