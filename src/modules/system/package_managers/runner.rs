//! Process execution for package manager commands

use crate::modules::error::PackageManagerError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Captured stdout lines and exit status of a query command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub lines: Vec<String>,
    pub exit_code: i32,
}

impl QueryOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Exit status of an action command. Output is not captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external commands to completion.
///
/// A process terminated without an exit code (killed by a signal) reports `-1`.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and capture its standard output
    async fn output(&self, program: &str, args: &[String])
        -> Result<QueryOutcome, PackageManagerError>;

    /// Run `program` with `args` and report only its exit status
    async fn status(&self, program: &str, args: &[String])
        -> Result<CommandResult, PackageManagerError>;
}

/// Default runner backed by `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn output(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<QueryOutcome, PackageManagerError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await?;

        let lines = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();

        Ok(QueryOutcome {
            lines,
            exit_code: output.status.code().unwrap_or(-1),
        })
    }

    async fn status(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<CommandResult, PackageManagerError> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .await?;

        Ok(CommandResult {
            exit_code: status.code().unwrap_or(-1),
        })
    }
}
