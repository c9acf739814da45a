//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and data.

use crate::cli::OutputFormat;
use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Configuration directory (~/.config/racetable)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/racetable)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve the platform directories.
    pub fn discover() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "racetable", "racetable")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        })
    }

    /// Keep everything under a single root directory.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    /// Create the directories if they do not exist yet.
    pub fn ensure(&self) -> ConfigResult<()> {
        for dir in [&self.config_dir, &self.data_dir] {
            fs::create_dir_all(dir).map_err(|e| ConfigError::WriteFailed {
                path: dir.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    pub fn snapshots_dir(&self) -> PathBuf {
        self.data_dir.join("snapshots")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Format used when a command is not given one.
    pub default_format: OutputFormat,
    /// Save a snapshot after every import.
    pub auto_save: bool,
    /// Delete snapshots older than this many days on import, 0 keeps them all.
    pub retention_days: u32,
    /// Widest a cell may get in plain output before it is truncated.
    pub max_cell_width: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Plain,
            auto_save: true,
            retention_days: 0,
            max_cell_width: 24,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self, paths: &Paths) -> ConfigResult<()> {
        paths.ensure()?;
        let file = paths.settings_file();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&file, content).map_err(|e| ConfigError::WriteFailed {
            path: file,
            reason: e.to_string(),
        })
    }
}
