//! Path management for dirsnap
//!
//! The tool operates relative to its base directory: backups are created
//! directly under it, and backup sources are its sibling directories (the
//! other entries of its parent).
//!
//! ## Path Resolution Order
//!
//! 1. `DIRSNAP_BASE_DIR` environment variable (if set)
//! 2. The process working directory

use std::path::{Path, PathBuf};

use crate::error::DirsnapError;

/// Manages all paths used by dirsnap
#[derive(Debug, Clone)]
pub struct DirsnapPaths {
    /// Base directory the tool operates from
    base_dir: PathBuf,
}

impl DirsnapPaths {
    /// Create a new DirsnapPaths instance
    ///
    /// Path resolution:
    /// 1. `DIRSNAP_BASE_DIR` env var (explicit override)
    /// 2. The process working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, DirsnapError> {
        let base_dir = if let Ok(custom) = std::env::var("DIRSNAP_BASE_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                DirsnapError::Config(format!("Could not determine working directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create DirsnapPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the directory backups are placed in (the base directory itself)
    ///
    /// Keeping backups inside the base directory means they never show up
    /// as backup sources, which are discovered among the base directory's
    /// siblings.
    pub fn backup_root(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the parent directory that backup sources live under
    ///
    /// Returns `None` when the base directory has no parent (filesystem
    /// root), in which case there are no sibling folders to back up.
    pub fn parent_dir(&self) -> Option<PathBuf> {
        self.base_dir.parent().map(Path::to_path_buf)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("dirsnap.json")
    }

    /// Resolve a selected sibling folder name to its full source path
    pub fn source_path(&self, folder_name: &str) -> Option<PathBuf> {
        self.parent_dir().map(|parent| parent.join(folder_name))
    }
}
