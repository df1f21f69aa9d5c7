//! Configuration for the rug package manager adapter

use crate::modules::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RugConfig {
    /// Program invoked for queries and actions
    pub binary: String,
    pub log_level: String,
}

impl Default for RugConfig {
    fn default() -> Self {
        Self {
            binary: "rug".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl RugConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_yaml(&contents)
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}
