//! User settings for dirsnap
//!
//! A small JSON settings file kept next to the backups. Everything has a
//! serde default so the file can be absent or partial.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::DirsnapPaths;
use crate::error::DirsnapError;

/// User settings for dirsnap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Where to place backups instead of the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<PathBuf>,

    /// Date format for the backup table (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            backup_dir: None,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &DirsnapPaths) -> Result<Self, DirsnapError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DirsnapError::Io(format!("Failed to read settings: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| DirsnapError::Json(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DirsnapPaths) -> Result<(), DirsnapError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DirsnapError::Json(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), json)
            .map_err(|e| DirsnapError::Io(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// The directory backups are created in, honoring the override
    pub fn backup_root(&self, paths: &DirsnapPaths) -> PathBuf {
        self.backup_dir
            .clone()
            .unwrap_or_else(|| paths.backup_root())
    }
}
