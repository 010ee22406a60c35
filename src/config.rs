//! Application configuration.
//!
//! Settings come from a JSON file, either named on the command line or found
//! in the per-user config directory, and fall back to defaults.
use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{IdStrategy, NotesError, Result};

/// Name of the backing file used when nothing else is configured
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// JSON file holding every note
    pub notes_file: PathBuf,

    /// How ids are assigned to new notes
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_file: PathBuf::from(DEFAULT_NOTES_FILE),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicitly given file must exist. Without one, the per-user config
    /// file is read if present, and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_fallback(explicit, Self::user_config_path().as_deref())
    }

    /// [`Config::load`] with the per-user config location supplied by the caller
    pub fn load_with_fallback(
        explicit: Option<&Path>,
        user_config: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(NotesError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                });
            }
            return Self::from_file(path);
        }

        match user_config {
            Some(path) if path.exists() => Self::from_file(path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| NotesError::ConfigError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| NotesError::ConfigError {
            message: format!("Invalid config file {}: {}", path.display(), e),
        })
    }

    /// Location of the per-user config file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "notepad").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Applies command-line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        notes_file: Option<PathBuf>,
        id_strategy: Option<IdStrategy>,
    ) -> Self {
        if let Some(file) = notes_file {
            self.notes_file = file;
        }
        if let Some(strategy) = id_strategy {
            self.id_strategy = strategy;
        }
        self
    }
}
