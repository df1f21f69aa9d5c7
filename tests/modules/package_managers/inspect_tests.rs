//! State queries through `rug info`

use super::helpers::{manager, ScriptedRunner};
use rug_package::{InstalledState, PackageManager, PackageManagerError};

#[tokio::test]
async fn test_runs_rug_info_with_package_name() {
    let runner = ScriptedRunner::new().with_output(&["Version: 1.0"]);
    manager(&runner).query_package("cups").await.unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].command_line(), "rug info cups");
}

#[tokio::test]
async fn test_not_installed_package() {
    let runner = ScriptedRunner::new().with_output(&["Version: 1.0", "Installed: No"]);
    let state = manager(&runner).query_package("cups").await.unwrap();

    assert_eq!(
        state,
        InstalledState {
            installed: false,
            installed_version: None,
            candidate_version: "1.0".to_string(),
            out_of_date: false,
        }
    );
}

#[tokio::test]
async fn test_out_of_date_package() {
    let runner = ScriptedRunner::new().with_output(&[
        "Version: 1.0",
        "Installed: Yes",
        "Status: out-of-date (version 0.9 installed)",
    ]);
    let state = manager(&runner).query_package("cups").await.unwrap();

    assert!(state.installed);
    assert!(state.out_of_date);
    assert_eq!(state.installed_version.as_deref(), Some("0.9"));
    assert_eq!(state.candidate_version, "1.0");
}

#[tokio::test]
async fn test_up_to_date_package() {
    let runner = ScriptedRunner::new().with_output(&[
        "Catalog: SLES10-Updates",
        "Name: cups",
        "Version: 1.1.23-40.6",
        "Installed: Yes",
        "Status: up-to-date",
    ]);
    let state = manager(&runner).query_package("cups").await.unwrap();

    assert!(state.installed);
    assert!(!state.out_of_date);
    assert_eq!(state.installed_version.as_deref(), Some("1.1.23-40.6"));
    assert_eq!(state.candidate_version, "1.1.23-40.6");
}

#[tokio::test]
async fn test_candidate_kept_when_not_installed_but_out_of_date_reported() {
    let runner = ScriptedRunner::new().with_output(&[
        "Version: 1.0",
        "Installed: No",
        "Status: out-of-date (version 0.9 installed)",
    ]);
    let state = manager(&runner).query_package("cups").await.unwrap();

    assert_eq!(state.candidate_version, "1.0");
    assert_eq!(state.installed_version, None);
}

#[tokio::test]
async fn test_non_zero_exit_is_query_failure() {
    let runner = ScriptedRunner::new()
        .with_output(&["Version: 1.0", "Installed: Yes"])
        .with_exit_code(1);
    let err = manager(&runner).query_package("cups").await.unwrap_err();

    match err {
        PackageManagerError::QueryFailed { package, exit_code } => {
            assert_eq!(package, "cups");
            assert_eq!(exit_code, 1);
        }
        other => panic!("expected QueryFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_version_line_is_missing_candidate() {
    let runner = ScriptedRunner::new();
    let err = manager(&runner).query_package("cups").await.unwrap_err();

    match err {
        PackageManagerError::NoCandidateVersion { package } => assert_eq!(package, "cups"),
        other => panic!("expected NoCandidateVersion, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_failure_wins_over_missing_candidate() {
    let runner = ScriptedRunner::new().with_exit_code(1);
    let err = manager(&runner).query_package("cups").await.unwrap_err();

    assert!(matches!(err, PackageManagerError::QueryFailed { .. }));
    assert_eq!(err.exit_code(), Some(1));
}

#[tokio::test]
async fn test_spawn_failure_is_command_failure() {
    let runner = ScriptedRunner::new().failing_to_spawn();
    let err = manager(&runner).query_package("cups").await.unwrap_err();

    assert!(matches!(err, PackageManagerError::CommandFailed { .. }));
    assert_eq!(err.exit_code(), None);
}
