//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod backup;
pub mod list;
pub mod update;

pub use backup::{handle_backup_command, handle_delete_command};
pub use list::handle_list_command;
pub use update::handle_update_command;
