//! Backup display formatting
//!
//! Formats the existing-backups table, the sibling-folder list, and action
//! outcomes for terminal output.

use crate::registry::BackupRecord;
use crate::services::{ActionOutcome, Severity};

/// Format the existing backups as a table
///
/// Columns: source name, label (the display-only split of the stored name),
/// and creation date in the configured format.
pub fn format_backup_table(records: &[BackupRecord], date_format: &str) -> String {
    if records.is_empty() {
        return "No backups found.".to_string();
    }

    let parts: Vec<_> = records.iter().map(|r| r.named()).collect();

    // Calculate column widths
    let name_width = parts
        .iter()
        .map(|p| p.source_name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let label_width = parts
        .iter()
        .map(|p| p.label.len())
        .max()
        .unwrap_or(5)
        .max(5);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<label_width$}  {}\n",
        "Name",
        "Label",
        "Created",
        name_width = name_width,
        label_width = label_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:-<label_width$}  {:-<19}\n",
        "",
        "",
        "",
        name_width = name_width,
        label_width = label_width,
    ));

    // Backup rows, already newest first
    for (record, named) in records.iter().zip(&parts) {
        output.push_str(&format!(
            "{:<name_width$}  {:<label_width$}  {}\n",
            named.source_name,
            named.label,
            record.created_at.format(date_format),
            name_width = name_width,
            label_width = label_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} backup(s)\n", records.len()));

    output
}

/// Format the list of sibling folders available as backup sources
pub fn format_sibling_list(siblings: &[String]) -> String {
    if siblings.is_empty() {
        return "No sibling folders found.".to_string();
    }

    let mut output = String::from("Available folders:\n");
    for name in siblings {
        output.push_str(&format!("  {}\n", name));
    }
    output
}

/// Format an action outcome, one marked line per folder
pub fn format_outcome(outcome: &ActionOutcome) -> String {
    let mut output = String::new();
    for line in outcome.lines() {
        let marker = match line.severity {
            Severity::Success => "[ok]",
            Severity::Error => "[error]",
        };
        output.push_str(&format!("{} {}\n", marker, line.text));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn record(name: &str, secs: i64) -> BackupRecord {
        BackupRecord {
            name: name.to_string(),
            path: PathBuf::from("/tmp").join(name),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_backup_table(&[], "%Y-%m-%d"), "No backups found.");
    }

    #[test]
    fn test_table_contains_split_names_and_dates() {
        let records = vec![
            record("projectA_nightly-run", 1_700_000_000),
            record("projectB_v2", 1_600_000_000),
        ];

        let table = format_backup_table(&records, "%Y-%m-%d %H:%M:%S");

        assert!(table.contains("Name"));
        assert!(table.contains("Label"));
        assert!(table.contains("projectA"));
        assert!(table.contains("nightly-run"));
        assert!(table.contains("projectB"));
        assert!(table.contains("2023-11-14"));
        assert!(table.contains("Total: 2 backup(s)"));
    }

    #[test]
    fn test_sibling_list() {
        let siblings = vec!["apple".to_string(), "Mango".to_string()];
        let listing = format_sibling_list(&siblings);
        assert!(listing.contains("apple"));
        assert!(listing.contains("Mango"));

        assert_eq!(format_sibling_list(&[]), "No sibling folders found.");
    }

    #[test]
    fn test_outcome_markers() {
        let mut outcome = ActionOutcome::new();
        outcome.push_success("created");
        outcome.push_error("failed");

        let text = format_outcome(&outcome);
        assert!(text.contains("[ok] created"));
        assert!(text.contains("[error] failed"));
    }
}
