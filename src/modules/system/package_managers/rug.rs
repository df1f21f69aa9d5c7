//! rug package manager for SUSE Linux Enterprise / ZENworks systems

use crate::config::RugConfig;
use crate::modules::{
    error::PackageManagerError,
    system::package_managers::{
        command::{action_args, query_args, render_command_line},
        info::InfoParser,
        runner::{CommandRunner, TokioCommandRunner},
        ActionRequest, InstalledState, PackageAction, PackageManager,
    },
};
use async_trait::async_trait;
use tracing::{debug, info, warn};

pub struct RugPackageManager<R = TokioCommandRunner> {
    binary: String,
    runner: R,
}

impl Default for RugPackageManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RugPackageManager {
    pub fn new() -> Self {
        Self::from_config(&RugConfig::default())
    }

    pub fn from_config(config: &RugConfig) -> Self {
        Self::with_runner(config.binary.clone(), TokioCommandRunner)
    }
}

impl<R: CommandRunner> RugPackageManager<R> {
    pub fn with_runner(binary: impl Into<String>, runner: R) -> Self {
        Self {
            binary: binary.into(),
            runner,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn is_available(&self) -> bool {
        which::which(&self.binary).is_ok()
    }

    pub fn ensure_available(&self) -> Result<(), PackageManagerError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(PackageManagerError::ManagerNotAvailable {
                manager: self.binary.clone(),
            })
        }
    }

    /// Query `rug info` and derive the installed and candidate versions.
    ///
    /// The whole output is parsed before the exit status is looked at, and a non-zero exit
    /// takes precedence over a missing candidate version.
    pub async fn inspect(&self, name: &str) -> Result<InstalledState, PackageManagerError> {
        debug!("Checking rug for {name}");
        let parser = InfoParser::new()?;

        let outcome = self.runner.output(&self.binary, &query_args(name)).await?;
        let state = parser.parse(&outcome.lines);

        if !outcome.success() {
            warn!(
                "rug info {name} failed with exit code {}",
                outcome.exit_code
            );
            return Err(PackageManagerError::QueryFailed {
                package: name.to_string(),
                exit_code: outcome.exit_code,
            });
        }

        if state.candidate_version.is_empty() {
            return Err(PackageManagerError::NoCandidateVersion {
                package: name.to_string(),
            });
        }

        debug!("rug current state for {name}: {state:?}");
        Ok(state)
    }

    /// Command line that `dispatch` would run for `request`
    pub fn command_line(&self, request: &ActionRequest) -> String {
        render_command_line(&self.binary, &action_args(request))
    }

    pub async fn dispatch(&self, request: &ActionRequest) -> Result<(), PackageManagerError> {
        let args = action_args(request);
        info!(
            "Running {} for {}: {}",
            request.action,
            request.name,
            render_command_line(&self.binary, &args)
        );

        let result = self.runner.status(&self.binary, &args).await?;
        if result.success() {
            Ok(())
        } else {
            warn!(
                "rug {} of {} failed with exit code {}",
                request.action, request.name, result.exit_code
            );
            Err(PackageManagerError::ExecutionFailed {
                action: request.action,
                package: request.name.clone(),
                exit_code: result.exit_code,
            })
        }
    }
}

#[async_trait]
impl<R: CommandRunner> PackageManager for RugPackageManager<R> {
    async fn query_package(&self, name: &str) -> Result<InstalledState, PackageManagerError> {
        self.inspect(name).await
    }

    async fn install_package(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), PackageManagerError> {
        self.dispatch(&ActionRequest::new(PackageAction::Install, name, version))
            .await
    }

    async fn upgrade_package(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), PackageManagerError> {
        self.dispatch(&ActionRequest::new(PackageAction::Upgrade, name, version))
            .await
    }

    async fn remove_package(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), PackageManagerError> {
        self.dispatch(&ActionRequest::new(PackageAction::Remove, name, version))
            .await
    }

    async fn purge_package(
        &self,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), PackageManagerError> {
        self.dispatch(&ActionRequest::new(PackageAction::Purge, name, version))
            .await
    }
}
