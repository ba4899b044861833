//! Backup registry for dirsnap
//!
//! Enumerates the backup directories under a root and orders them newest
//! first. There is no in-memory authoritative copy: every listing re-scans
//! the filesystem, so the registry is always as fresh as the last call and
//! no staler.
//!
//! Every subdirectory of the root is treated as a backup candidate — the
//! registry does not filter by name pattern, so an incidental directory
//! placed there will appear in the list.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DirsnapResult;
use crate::listing;
use crate::naming;

/// One snapshot on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Base name of the backup directory, format `<source>_<label>`
    pub name: String,
    /// Full path to the backup directory
    pub path: PathBuf,
    /// When the directory was created, from filesystem metadata
    pub created_at: DateTime<Utc>,
}

/// Display-only decomposition of a backup name
///
/// Derived by splitting on the first `_`; never fed back into a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSnapshot {
    /// The source folder the backup was taken from
    pub source_name: String,
    /// The user's label, empty when the name carries none
    pub label: String,
}

impl BackupRecord {
    /// Split this record's name into its display parts
    pub fn named(&self) -> NamedSnapshot {
        let (source_name, label) = naming::split_display_name(&self.name);
        NamedSnapshot {
            source_name: source_name.to_string(),
            label: label.to_string(),
        }
    }
}

/// List the backups under `root`, newest first
///
/// Creation time comes from filesystem metadata where the platform provides
/// it, falling back to modification time otherwise (an accepted portability
/// caveat). The sort is stable, so entries with equal timestamps keep their
/// listing order. A missing or unreadable root yields an empty list.
pub fn list_backups(root: &Path) -> DirsnapResult<Vec<BackupRecord>> {
    let mut records = Vec::new();

    for entry in listing::list_directories(root) {
        let path = root.join(&entry.name);
        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            // Raced away between listing and stat; skip it
            Err(_) => continue,
        };

        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map(DateTime::<Utc>::from);
        let created_at = match created {
            Ok(created_at) => created_at,
            Err(_) => continue,
        };

        records.push(BackupRecord {
            name: entry.name,
            path,
            created_at,
        });
    }

    // Sort by creation date, newest first
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(records)
}
