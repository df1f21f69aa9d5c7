use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::modules::system::package_managers::{ActionRequest, PackageAction};

/// Query and manage packages through rug
#[derive(Parser)]
#[command(name = "rug-package")]
#[command(about = "Inspect, install and remove packages with the rug package manager")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct RugPackageCli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the rug binary (overrides the configuration file)
    #[arg(long, global = true)]
    pub binary: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show installed and candidate versions of a package
    Info {
        name: String,

        /// Print the state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Install a package
    Install(ActionArgs),

    /// Upgrade a package
    Upgrade(ActionArgs),

    /// Remove a package
    Remove(ActionArgs),

    /// Remove a package and its configuration
    Purge(ActionArgs),
}

#[derive(Args)]
pub struct ActionArgs {
    pub name: String,

    /// Specific version to act on
    #[arg(long = "pkg-version")]
    pub version: Option<String>,

    /// Print the command without running it
    #[arg(long)]
    pub dry_run: bool,
}

impl Commands {
    /// Whether the subcommand only prints what it would run
    pub fn is_dry_run(&self) -> bool {
        matches!(self.action_request(), Some((_, true)))
    }

    /// The action request for a mutating subcommand, `None` for `info`
    pub fn action_request(&self) -> Option<(ActionRequest, bool)> {
        let (action, args) = match self {
            Commands::Info { .. } => return None,
            Commands::Install(args) => (PackageAction::Install, args),
            Commands::Upgrade(args) => (PackageAction::Upgrade, args),
            Commands::Remove(args) => (PackageAction::Remove, args),
            Commands::Purge(args) => (PackageAction::Purge, args),
        };
        Some((
            ActionRequest::new(action, args.name.clone(), args.version.as_deref()),
            args.dry_run,
        ))
    }
}
