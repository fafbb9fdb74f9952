//! Configuration loaded from `~/.config/calcbrain/config.toml`.
//!
//! Every field is optional:
//!
//! ```toml
//! log_filter = "calcbrain=debug"
//! program_file = "~/.local/state/calcbrain/program.json"
//!
//! [variables]
//! M = 0
//! rate = 0.0825
//! ```

use crate::calculator::{CalcBrain, ProgramEntry, VariableStore, from_json, to_json};
use crate::error::{ConfigError, ProgramError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// `tracing-subscriber` filter directive.
    pub log_filter: Option<String>,
    /// Program loaded on start and saved on exit.
    pub program_file: Option<PathBuf>,
    /// Variables preset before any program is replayed.
    pub variables: BTreeMap<String, f64>,
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcbrain").join("config.toml"))
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load the config at the default location, or defaults if there is none.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// The program file with a leading `~/` expanded.
    pub fn program_path(&self) -> Option<PathBuf> {
        self.program_file.as_deref().map(expand_home)
    }

    /// Build a variable store holding the preset variables.
    pub fn variable_store(&self) -> VariableStore {
        let mut store = VariableStore::new();
        for (name, value) in &self.variables {
            store.set(name, *value);
        }
        store
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Read a saved program.
pub fn load_program(path: &Path) -> Result<Vec<ProgramEntry>, ProgramError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProgramError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&content).map_err(|source| ProgramError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Save the engine's program, creating parent directories as needed.
pub fn save_program(path: &Path, brain: &CalcBrain) -> Result<(), ProgramError> {
    let json = to_json(brain.program())?;
    let write_error = |source| ProgramError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, json).map_err(write_error)
}
