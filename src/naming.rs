//! Backup naming policy
//!
//! A backup's stored name is `<source>_<label>`: the source folder name, an
//! underscore, and the user's label with whitespace runs collapsed to `-`.
//! The split back into (source, label) is on the first underscore only, so a
//! source name that itself contains `_` does not round-trip; the split is
//! display-only and never fed back into a path.

use std::path::Path;

/// Normalize a user-supplied label
///
/// Trims leading/trailing whitespace, then collapses every interior run of
/// whitespace to a single `-`. May normalize to the empty string; the action
/// layer rejects empty labels before deriving a name.
pub fn normalize_label(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Derive the destination folder name for a backup
///
/// An empty normalized label yields a trailing underscore; callers are
/// expected to reject empty labels upstream.
pub fn derive_destination_name(source_name: &str, label: &str) -> String {
    format!("{}_{}", source_name, normalize_label(label))
}

/// Check whether a directory already exists at `destination`
///
/// Must be called before `snapshot::copy_tree`, which merges into an
/// existing destination rather than failing.
pub fn check_collision(destination: &Path) -> bool {
    destination.is_dir()
}

/// Split a stored backup name into (source name, label) for display
///
/// Splits on the first `_`; when there is none, the label is empty and the
/// source name is the whole string. Lossy for source names containing `_`.
pub fn split_display_name(name: &str) -> (&str, &str) {
    match name.split_once('_') {
        Some((source, label)) => (source, label),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_label("  nightly   run  "), "nightly-run");
        assert_eq!(normalize_label("one two\tthree"), "one-two-three");
        assert_eq!(normalize_label("plain"), "plain");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("   \t "), "");
    }

    #[test]
    fn test_derive_destination_name() {
        assert_eq!(
            derive_destination_name("projectA", "  nightly   run  "),
            "projectA_nightly-run"
        );
    }

    #[test]
    fn test_derive_with_empty_label_keeps_trailing_underscore() {
        assert_eq!(derive_destination_name("projectA", "  "), "projectA_");
    }

    #[test]
    fn test_split_display_name() {
        assert_eq!(split_display_name("projectA_nightly"), ("projectA", "nightly"));
        assert_eq!(split_display_name("plain"), ("plain", ""));
        assert_eq!(split_display_name("projectA_"), ("projectA", ""));
    }

    #[test]
    fn test_round_trip_for_sources_without_underscore() {
        let name = derive_destination_name("projectA", "v2 final");
        let (source, label) = split_display_name(&name);
        assert_eq!(source, "projectA");
        assert_eq!(label, "v2-final");
    }

    #[test]
    fn test_split_is_lossy_for_sources_with_underscore() {
        // A source name containing `_` cannot be recovered: the first
        // underscore wins and the rest lands in the label.
        let name = derive_destination_name("a_b", "x");
        assert_eq!(name, "a_b_x");

        let (source, label) = split_display_name(&name);
        assert_eq!(source, "a");
        assert_eq!(label, "b_x");
    }

    #[test]
    fn test_check_collision() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("projectA_nightly");
        fs::create_dir(&existing).unwrap();

        assert!(check_collision(&existing));
        assert!(!check_collision(&temp_dir.path().join("projectA_weekly")));

        // A plain file at the path is not a directory collision
        let file = temp_dir.path().join("projectA_file");
        fs::write(&file, "x").unwrap();
        assert!(!check_collision(&file));
    }
}
