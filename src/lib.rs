//! dirsnap - Folder backup utility for sibling project directories
//!
//! This library provides the core functionality for the dirsnap backup
//! utility. It creates timestamped full copies of the directories that sit
//! next to its own base directory, lists them newest first, deletes them on
//! request, and compares the installed version against the latest release
//! tag.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `listing`: Tolerant directory listing and sibling discovery
//! - `snapshot`: Recursive copy and delete over directory trees
//! - `registry`: Enumeration and ordering of existing backups
//! - `naming`: Backup naming policy and collision checks
//! - `version`: Version tag comparison
//! - `services`: Action handlers returning explicit outcomes
//! - `display`: Terminal output formatting
//! - `cli`: CLI command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use dirsnap::config::{DirsnapPaths, Settings};
//! use dirsnap::services::BackupService;
//!
//! let paths = DirsnapPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let service = BackupService::new(&paths, &settings);
//! let outcome = service.create_backups(&selections, "nightly");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod listing;
pub mod naming;
pub mod registry;
pub mod services;
pub mod snapshot;
pub mod version;

pub use error::DirsnapError;
