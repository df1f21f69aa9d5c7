//! rug-package - package manager adapter for rug
//!
//! Queries installed and candidate package versions from `rug info` and dispatches install,
//! upgrade, remove and purge commands.

pub mod cli;
pub mod config;
pub mod modules;

pub use config::RugConfig;
pub use modules::error::{ConfigError, PackageManagerError};
pub use modules::system::package_managers::{
    ActionRequest, InstalledState, PackageAction, PackageManager, RugPackageManager,
};
