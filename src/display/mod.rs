//! Display formatting for terminal output
//!
//! Formats backup records, sibling lists, and action outcomes for the CLI.

pub mod backup;

pub use backup::{format_backup_table, format_outcome, format_sibling_list};
