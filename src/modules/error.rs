use thiserror::Error;

use crate::modules::system::package_managers::PackageAction;

/// Package manager specific errors
#[derive(Error, Debug)]
pub enum PackageManagerError {
    #[error("Package query failed for {package} (exit code {exit_code})")]
    QueryFailed { package: String, exit_code: i32 },

    #[error("No candidate version available for package {package}")]
    NoCandidateVersion { package: String },

    #[error("Package {action} failed for {package} (exit code {exit_code})")]
    ExecutionFailed {
        action: PackageAction,
        package: String,
        exit_code: i32,
    },

    #[error("Package manager not available: {manager}")]
    ManagerNotAvailable { manager: String },

    #[error("Command execution failed: {error}")]
    CommandFailed { error: String },

    #[error("Invalid output pattern: {error}")]
    InvalidPattern { error: String },
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Read { path: String, error: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<std::io::Error> for PackageManagerError {
    fn from(err: std::io::Error) -> Self {
        PackageManagerError::CommandFailed {
            error: err.to_string(),
        }
    }
}

impl From<regex::Error> for PackageManagerError {
    fn from(err: regex::Error) -> Self {
        PackageManagerError::InvalidPattern {
            error: err.to_string(),
        }
    }
}

impl PackageManagerError {
    /// Exit status of the external tool, when the failure came from one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PackageManagerError::QueryFailed { exit_code, .. }
            | PackageManagerError::ExecutionFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}
