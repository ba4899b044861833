//! Recursive tree copy and delete
//!
//! Traversal is call-stack recursive; tree depth in this domain is bounded by
//! ordinary project structures.

use std::fs;
use std::path::Path;

/// Recursively copy `source` into `destination`
///
/// Returns `0` if `source` is not a directory, with no filesystem mutation —
/// callers must treat a zero count as failure, not as "nothing to copy".
///
/// For a valid source the returned count starts at 1 for each directory
/// level, including the top-level invocation itself: an empty directory
/// yields 1, and the user-facing "files/folders copied" figure is the count
/// minus one. The action layer performs that subtraction.
///
/// `destination` and missing parents are created if absent; creation and
/// per-file copy failures are swallowed, so a partial copy leaves whatever
/// succeeded in place. Only regular file content and directory structure are
/// replicated; symlinks are followed, and permission bits beyond the default
/// are not preserved.
pub fn copy_tree(source: &Path, destination: &Path) -> u64 {
    if !source.is_dir() {
        return 0;
    }

    let _ = fs::create_dir_all(destination);
    let mut count: u64 = 1;

    let entries = match fs::read_dir(source) {
        Ok(entries) => entries,
        Err(_) => return count,
    };

    for entry in entries.flatten() {
        let src = entry.path();
        let dst = destination.join(entry.file_name());

        if src.is_dir() {
            count += copy_tree(&src, &dst);
        } else {
            // Counted whether or not the copy succeeds; failures surface only
            // through the missing file in the destination tree.
            let _ = fs::copy(&src, &dst);
            count += 1;
        }
    }

    count
}

/// Recursively delete the directory at `path`
///
/// Returns `false` if `path` is not a directory, with no mutation. Otherwise
/// every entry is removed (files unlinked, subdirectories recursed), and the
/// return value is the success of removing `path` itself. Entries that fail
/// to unlink are skipped, so a partial failure leaves a partially-emptied
/// tree and reports `false`.
pub fn remove_tree(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }

    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let child = entry.path();
            if child.is_dir() {
                remove_tree(&child);
            } else {
                let _ = fs::remove_file(&child);
            }
        }
    }

    fs::remove_dir(path).is_ok()
}
