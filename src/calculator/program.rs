//! The event log replayed by undo and program loading.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded operand or operator event.
///
/// Serializes untagged, so a saved program reads `[2, "+", "M", "="]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramEntry {
    /// A number typed as an operand.
    Number(f64),
    /// An operator symbol or a variable name; which one is decided at replay
    /// time by looking the name up in the variable store.
    Symbol(String),
}

impl ProgramEntry {
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self::Symbol(symbol.into())
    }
}

impl From<f64> for ProgramEntry {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProgramEntry {
    fn from(symbol: &str) -> Self {
        Self::Symbol(symbol.to_string())
    }
}

impl fmt::Display for ProgramEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Symbol(symbol) => f.write_str(symbol),
        }
    }
}

/// Append-only log of entries; only undo removes from the end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    entries: Vec<ProgramEntry>,
}

impl Program {
    pub fn push(&mut self, entry: ProgramEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<ProgramEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Move all entries out, leaving the log empty.
    pub fn take(&mut self) -> Vec<ProgramEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn entries(&self) -> &[ProgramEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a program saved as a JSON array.
pub fn from_json(json: &str) -> serde_json::Result<Vec<ProgramEntry>> {
    serde_json::from_str(json)
}

/// Render a program as a JSON array.
pub fn to_json(entries: &[ProgramEntry]) -> serde_json::Result<String> {
    serde_json::to_string(entries)
}
