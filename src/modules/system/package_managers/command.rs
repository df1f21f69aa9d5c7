//! Argument construction for rug commands

use crate::modules::system::package_managers::{ActionRequest, PackageAction};

/// Arguments for `rug info <name>`
pub fn query_args(name: &str) -> Vec<String> {
    vec!["info".to_string(), name.to_string()]
}

/// Arguments for an install/upgrade/remove/purge request.
///
/// Upgrade shares install's arguments and purge shares remove's. Name and version are passed
/// through verbatim as a single `<name>-<version>` argument.
pub fn action_args(request: &ActionRequest) -> Vec<String> {
    let target = match &request.version {
        Some(version) => format!("{}-{}", request.name, version),
        None => request.name.clone(),
    };

    let mut args = vec!["--quiet".to_string()];
    match request.action {
        PackageAction::Install | PackageAction::Upgrade => {
            args.extend(
                ["install", "-y", "--agree-to-third-party-licences"]
                    .iter()
                    .map(|s| s.to_string()),
            );
        }
        PackageAction::Remove | PackageAction::Purge => {
            args.extend(["remove", "-y"].iter().map(|s| s.to_string()));
        }
    }
    args.push(target);
    args
}

/// Shell-quoted rendering of a command, for logs and dry runs only
pub fn render_command_line(program: &str, args: &[String]) -> String {
    shell_words::join(std::iter::once(program).chain(args.iter().map(String::as_str)))
}
