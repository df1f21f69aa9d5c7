//! Package manager implementations

use crate::modules::error::PackageManagerError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle actions that can be dispatched against a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageAction {
    Install,
    Upgrade,
    Remove,
    Purge,
}

impl fmt::Display for PackageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageAction::Install => "install",
            PackageAction::Upgrade => "upgrade",
            PackageAction::Remove => "remove",
            PackageAction::Purge => "purge",
        };
        f.write_str(name)
    }
}

/// Installed and candidate versions of a package as reported by the package manager.
///
/// `installed_version` is only set when `installed` is true. When `out_of_date` is true it
/// holds the older version currently on the system, otherwise it equals `candidate_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledState {
    pub installed: bool,
    pub installed_version: Option<String>,
    pub candidate_version: String,
    pub out_of_date: bool,
}

/// A single action against a named package, optionally pinned to a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: PackageAction,
    pub name: String,
    pub version: Option<String>,
}

impl ActionRequest {
    pub fn new(action: PackageAction, name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            action,
            name: name.into(),
            version: version.map(str::to_string),
        }
    }
}

#[async_trait]
pub trait PackageManager: Send + Sync {
    async fn query_package(&self, name: &str) -> Result<InstalledState, PackageManagerError>;
    async fn install_package(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), PackageManagerError>;
    async fn upgrade_package(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), PackageManagerError>;
    async fn remove_package(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), PackageManagerError>;
    async fn purge_package(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), PackageManagerError>;
}

pub mod command;
pub mod info;
pub mod rug;
pub mod runner;

pub use command::{action_args, query_args, render_command_line};
pub use info::{InfoAccumulator, InfoParser};
pub use rug::RugPackageManager;
pub use runner::{CommandResult, CommandRunner, QueryOutcome, TokioCommandRunner};
