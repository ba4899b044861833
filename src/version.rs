//! Version comparison
//!
//! Three-way comparison of dotted-numeric version tags, used to decide
//! whether an update is available. Pure string work, no I/O: fetching the
//! latest released tag is the caller's concern.

use std::cmp::Ordering;

/// Relation of the current version to the latest released version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrdering {
    /// Current < latest: an update is available
    Older,
    /// Current == latest
    Same,
    /// Current > latest: running ahead of the last published tag
    Newer,
}

/// Compare two version tags
///
/// Exactly one leading literal `v` (lowercase) is stripped from each side if
/// present; anything else is compared as-is. The remaining dotted segments
/// are compared numerically left to right, with missing trailing segments
/// treated as `0` — so `"1.2"` equals `"1.2.0"`, and the empty string is
/// all-zero segments.
pub fn compare(current: &str, latest: &str) -> VersionOrdering {
    let current = current.strip_prefix('v').unwrap_or(current);
    let latest = latest.strip_prefix('v').unwrap_or(latest);

    let current_segments: Vec<u64> = current.split('.').map(parse_segment).collect();
    let latest_segments: Vec<u64> = latest.split('.').map(parse_segment).collect();

    let len = current_segments.len().max(latest_segments.len());
    for i in 0..len {
        let a = current_segments.get(i).copied().unwrap_or(0);
        let b = latest_segments.get(i).copied().unwrap_or(0);
        match a.cmp(&b) {
            Ordering::Less => return VersionOrdering::Older,
            Ordering::Greater => return VersionOrdering::Newer,
            Ordering::Equal => {}
        }
    }

    VersionOrdering::Same
}

/// Non-numeric segments compare as zero
fn parse_segment(segment: &str) -> u64 {
    segment.trim().parse().unwrap_or(0)
}
