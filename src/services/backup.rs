//! Backup service
//!
//! Action handlers for creating and deleting backups. Each handler processes
//! a batch of folder names and returns an [`ActionOutcome`] with one line per
//! folder; individual failures never abort the rest of the batch.
//!
//! Creation goes through a staging step: the tree is copied into a hidden
//! temporary directory next to the destination and renamed into place once
//! complete. The rename fails if the destination appeared concurrently,
//! which closes the window between the collision check and the copy.

use std::fs;
use std::path::PathBuf;

use crate::config::{DirsnapPaths, Settings};
use crate::naming;
use crate::snapshot;

use super::outcome::ActionOutcome;

/// Suffix of the hidden staging directory a backup is copied into
const STAGE_SUFFIX: &str = ".incoming";

/// Service for backup creation and deletion
pub struct BackupService {
    /// Directory the backup sources live under (the base dir's parent)
    parent_dir: Option<PathBuf>,
    /// Directory backups are created in
    backup_root: PathBuf,
}

impl BackupService {
    /// Create a new backup service from resolved paths and settings
    pub fn new(paths: &DirsnapPaths, settings: &Settings) -> Self {
        Self {
            parent_dir: paths.parent_dir(),
            backup_root: settings.backup_root(paths),
        }
    }

    /// Create a backup service with explicit roots (useful for testing)
    pub fn with_roots(parent_dir: Option<PathBuf>, backup_root: PathBuf) -> Self {
        Self {
            parent_dir,
            backup_root,
        }
    }

    /// Back up each selected sibling folder under a shared label
    ///
    /// Every selection produces one outcome line: a collision, an invalid
    /// source, or a success message reporting the number of files and
    /// folders copied.
    pub fn create_backups(&self, selections: &[String], label: &str) -> ActionOutcome {
        let mut outcome = ActionOutcome::new();

        if selections.is_empty() {
            outcome.push_error("No folders selected for backup.");
            return outcome;
        }

        if naming::normalize_label(label).is_empty() {
            outcome.push_error("Backup name cannot be empty.");
            return outcome;
        }

        for selection in selections {
            self.backup_one(selection, label, &mut outcome);
        }

        outcome
    }

    fn backup_one(&self, selection: &str, label: &str, outcome: &mut ActionOutcome) {
        if !is_plain_name(selection) {
            outcome.push_error(format!("Invalid folder name '{}'.", selection));
            return;
        }

        let source = match &self.parent_dir {
            Some(parent) => parent.join(selection),
            None => {
                outcome.push_error(format!(
                    "ERROR: '{}' is not a valid directory!",
                    selection
                ));
                return;
            }
        };

        let folder_name = naming::derive_destination_name(selection, label);
        let destination = self.backup_root.join(&folder_name);

        if naming::check_collision(&destination) {
            outcome.push_error(format!(
                "The folder '{}' already exists. Backup cannot be completed.",
                folder_name
            ));
            return;
        }

        // Stage next to the destination, then rename into place. A stage
        // left over from a killed run is stale and replaced.
        let stage = self.backup_root.join(format!(".{}{}", folder_name, STAGE_SUFFIX));
        if stage.is_dir() {
            snapshot::remove_tree(&stage);
        }

        let count = snapshot::copy_tree(&source, &stage);
        if count == 0 {
            outcome.push_error(format!(
                "ERROR: '{}' is not a valid directory!",
                selection
            ));
            return;
        }

        if fs::rename(&stage, &destination).is_err() {
            // The destination appeared while we were copying
            snapshot::remove_tree(&stage);
            outcome.push_error(format!(
                "The folder '{}' already exists. Backup cannot be completed.",
                folder_name
            ));
            return;
        }

        // The raw count includes the top-level directory itself
        outcome.push_success(format!(
            "The folder '{}' has been created with {} files/folders.",
            folder_name,
            count - 1
        ));
    }

    /// Delete each named backup under the backup root
    pub fn delete_backups(&self, names: &[String]) -> ActionOutcome {
        let mut outcome = ActionOutcome::new();

        if names.is_empty() {
            outcome.push_error("No backups selected for deletion.");
            return outcome;
        }

        for name in names {
            if !is_plain_name(name) {
                outcome.push_error(format!("Invalid backup name '{}'.", name));
                continue;
            }

            let path = self.backup_root.join(name);
            if snapshot::remove_tree(&path) {
                outcome.push_success(format!("Folder '{}' has been deleted.", name));
            } else {
                outcome.push_error(format!("Failed to delete folder '{}'.", name));
            }
        }

        outcome
    }

    /// The directory backups are created in
    pub fn backup_root(&self) -> &PathBuf {
        &self.backup_root
    }
}

/// A folder name the user may pass: one path component, no traversal
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
