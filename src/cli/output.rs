use crate::modules::system::package_managers::InstalledState;

/// Human-readable summary of a package state
pub fn format_state(name: &str, state: &InstalledState) -> String {
    let mut lines = vec![format!("Package:   {name}")];

    let status = match (state.installed, state.out_of_date) {
        (false, _) => "not installed",
        (true, true) => "installed (out of date)",
        (true, false) => "installed",
    };
    lines.push(format!("Status:    {status}"));

    if let Some(installed) = &state.installed_version {
        lines.push(format!("Installed: {installed}"));
    }
    lines.push(format!("Candidate: {}", state.candidate_version));
    lines.join("\n")
}

pub fn print_state(name: &str, state: &InstalledState) {
    println!("{}", format_state(name, state));
}

pub fn print_state_json(state: &InstalledState) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}
