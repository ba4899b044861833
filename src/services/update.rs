//! Update check
//!
//! Compares the installed version against the latest released tag and maps
//! the result to a user-facing status. Fetching the tag from the release
//! feed, and the self-update itself, are external to this crate — the check
//! only consumes the resulting version string.

use crate::version::{self, VersionOrdering};

/// Result of comparing the installed version to the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The installed version is behind the latest release
    UpdateAvailable { latest: String },
    /// The installed version matches the latest release
    UpToDate { current: String },
    /// The installed version is ahead of the last published tag
    Ahead { current: String },
}

impl UpdateStatus {
    /// The user-facing status message
    pub fn message(&self) -> String {
        match self {
            UpdateStatus::UpdateAvailable { latest } => {
                format!("New version {} available!", latest)
            }
            UpdateStatus::UpToDate { current } => current.clone(),
            UpdateStatus::Ahead { current } => format!("BETA-{} INSTALLED", current),
        }
    }
}

/// Check the installed version against the latest released tag
pub fn check_for_update(current: &str, latest: &str) -> UpdateStatus {
    match version::compare(current, latest) {
        VersionOrdering::Older => UpdateStatus::UpdateAvailable {
            latest: latest.to_string(),
        },
        VersionOrdering::Same => UpdateStatus::UpToDate {
            current: current.to_string(),
        },
        VersionOrdering::Newer => UpdateStatus::Ahead {
            current: current.to_string(),
        },
    }
}
