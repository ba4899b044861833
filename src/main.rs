use anyhow::Result;
use clap::{Parser, Subcommand};

use dirsnap::cli::{
    handle_backup_command, handle_delete_command, handle_list_command, handle_update_command,
};
use dirsnap::config::{DirsnapPaths, Settings};
use dirsnap::display::format_sibling_list;
use dirsnap::listing;
use dirsnap::services::BackupService;

#[derive(Parser)]
#[command(
    name = "dirsnap",
    version,
    about = "Folder backup utility for sibling project directories",
    long_about = "dirsnap creates full timestamped copies of the folders that sit \
                  next to its own directory. Backups are stored as sibling-named \
                  directories under the tool's directory and listed newest first."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Back up selected sibling folders under a label
    Backup {
        /// Label appended to each folder name (whitespace becomes '-')
        #[arg(short, long)]
        label: String,

        /// Sibling folder names to back up
        folders: Vec<String>,
    },

    /// List existing backups, newest first
    List {
        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Delete existing backups by name
    Delete {
        /// Backup folder names to delete
        names: Vec<String>,

        /// Skip the preview and delete immediately
        #[arg(short, long)]
        force: bool,
    },

    /// Show the sibling folders available as backup sources
    Siblings,

    /// Compare the installed version against a released tag
    CheckUpdate {
        /// The latest released tag (e.g. v1.3.0)
        #[arg(long)]
        latest: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = DirsnapPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Backup { label, folders }) => {
            let service = BackupService::new(&paths, &settings);
            handle_backup_command(&service, &label, &folders)?;
        }
        Some(Commands::List { json }) => {
            handle_list_command(&settings.backup_root(&paths), &settings, json)?;
        }
        Some(Commands::Delete { names, force }) => {
            let service = BackupService::new(&paths, &settings);
            handle_delete_command(&service, &names, force)?;
        }
        Some(Commands::Siblings) => {
            print!("{}", format_sibling_list(&listing::sibling_folders(paths.base_dir())));
        }
        Some(Commands::CheckUpdate { latest }) => {
            handle_update_command(&latest)?;
        }
        Some(Commands::Config) => {
            println!("dirsnap Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!(
                "Backup directory: {}",
                settings.backup_root(&paths).display()
            );
            match paths.parent_dir() {
                Some(parent) => println!("Source parent:    {}", parent.display()),
                None => println!("Source parent:    (none - base has no parent)"),
            }
            println!();
            println!("Settings:");
            println!("  Date format: {}", settings.date_format);
        }
        None => {
            println!("dirsnap - Folder backup utility");
            println!();
            println!("Run 'dirsnap --help' for usage information.");
            println!("Run 'dirsnap siblings' to see what can be backed up.");
        }
    }

    Ok(())
}
