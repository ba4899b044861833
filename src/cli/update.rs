//! Update-check CLI command

use crate::error::DirsnapResult;
use crate::services;

/// Handle the check-update command
///
/// `latest` is the most recent released tag, obtained out-of-band (the
/// release feed is not queried from here).
pub fn handle_update_command(latest: &str) -> DirsnapResult<()> {
    let current = concat!("v", env!("CARGO_PKG_VERSION"));
    let status = services::check_for_update(current, latest);
    println!("{}", status.message());
    Ok(())
}
