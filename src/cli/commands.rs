use crate::cli::options::{Commands, RugPackageCli};
use crate::cli::output::{print_state, print_state_json};
use crate::config::RugConfig;
use crate::modules::system::package_managers::{CommandRunner, RugPackageManager};
use anyhow::{Context, Result};
use tracing::info;

/// Load the configuration file (if any) and apply command-line overrides
pub fn resolve_config(cli: &RugPackageCli) -> Result<RugConfig> {
    let config = match &cli.config {
        Some(path) => RugConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RugConfig::default(),
    };

    Ok(match &cli.binary {
        Some(binary) => config.with_binary(binary.clone()),
        None => config,
    })
}

/// Run a parsed subcommand against `manager`
pub async fn run_command<R: CommandRunner>(
    manager: &RugPackageManager<R>,
    command: &Commands,
) -> Result<()> {
    if let Some((request, dry_run)) = command.action_request() {
        if dry_run {
            println!("{}", manager.command_line(&request));
            return Ok(());
        }

        manager.dispatch(&request).await?;
        info!("{} of {} completed", request.action, request.name);
        return Ok(());
    }

    if let Commands::Info { name, json } = command {
        let state = manager.inspect(name).await?;
        if *json {
            print_state_json(&state)?;
        } else {
            print_state(name, &state);
        }
    }

    Ok(())
}
