//! Backup and delete CLI commands

use crate::display;
use crate::error::DirsnapResult;
use crate::services::BackupService;

/// Handle the backup command: copy each selected sibling folder
pub fn handle_backup_command(
    service: &BackupService,
    label: &str,
    folders: &[String],
) -> DirsnapResult<()> {
    let outcome = service.create_backups(folders, label);
    print!("{}", display::format_outcome(&outcome));
    Ok(())
}

/// Handle the delete command
///
/// Without `--force` this only previews what would be deleted; the engine
/// itself asks for no confirmation, so the prompt lives here at the surface.
pub fn handle_delete_command(
    service: &BackupService,
    names: &[String],
    force: bool,
) -> DirsnapResult<()> {
    if !force {
        println!("Would delete the following backups:");
        for name in names {
            println!("  {}", name);
        }
        println!();
        println!("To proceed, run again with --force flag:");
        println!("  dirsnap delete {} --force", names.join(" "));
        return Ok(());
    }

    let outcome = service.delete_backups(names);
    print!("{}", display::format_outcome(&outcome));
    Ok(())
}
