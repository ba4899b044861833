//! Directory listing
//!
//! Tolerant enumeration of directories under a path, and discovery of the
//! sibling folders that are eligible as backup sources. Listing never fails:
//! a missing or unreadable path yields an empty result, so the tool keeps
//! working when launched from an unusual location.

use std::path::Path;

/// A single entry produced by listing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Base name of the entry, no path separators
    pub name: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// List the directories directly under `path`
///
/// Only directories are returned; `.` and `..` are never produced. Ordering
/// is filesystem-dependent — callers that need a deterministic order must
/// sort. Returns an empty vector if `path` does not exist, is not a
/// directory, or cannot be read.
pub fn list_directories(path: &Path) -> Vec<DirectoryEntry> {
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            dirs.push(DirectoryEntry { name, is_dir });
        }
    }

    dirs
}

/// Discover the sibling folders of `base_dir`
///
/// Returns the names of the directories under `base_dir`'s parent, excluding
/// `base_dir` itself, sorted case-insensitively. These are the folders
/// offered as backup sources. Empty when `base_dir` has no parent.
pub fn sibling_folders(base_dir: &Path) -> Vec<String> {
    let parent = match base_dir.parent() {
        Some(parent) => parent,
        None => return Vec::new(),
    };
    let own_name = base_dir.file_name().map(|n| n.to_string_lossy().to_string());

    let mut names: Vec<String> = list_directories(parent)
        .into_iter()
        .map(|entry| entry.name)
        .filter(|name| Some(name) != own_name.as_ref())
        .collect();

    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    names
}
