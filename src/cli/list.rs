//! List CLI command

use std::path::Path;

use crate::config::Settings;
use crate::display;
use crate::error::DirsnapResult;
use crate::registry;

/// Handle the list command: show existing backups, newest first
pub fn handle_list_command(backup_root: &Path, settings: &Settings, json: bool) -> DirsnapResult<()> {
    let backups = registry::list_backups(backup_root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&backups)?);
    } else {
        print!(
            "{}",
            display::format_backup_table(&backups, &settings.date_format)
        );
    }

    Ok(())
}
