//! Property-based tests for argument construction and state derivation

use super::helpers::{manager, ScriptedRunner};
use proptest::prelude::*;
use rug_package::modules::system::package_managers::{action_args, InfoParser};
use rug_package::{ActionRequest, PackageAction, PackageManager, PackageManagerError};

fn package_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9+._-]{0,20}"
}

fn version_token() -> impl Strategy<Value = String> {
    "[0-9][0-9a-z.+~-]{0,12}"
}

proptest! {
    #[test]
    fn upgrade_args_match_install(name in package_name(), version in proptest::option::of(version_token())) {
        let install = action_args(&ActionRequest::new(PackageAction::Install, name.clone(), version.as_deref()));
        let upgrade = action_args(&ActionRequest::new(PackageAction::Upgrade, name, version.as_deref()));
        prop_assert_eq!(install, upgrade);
    }

    #[test]
    fn purge_args_match_remove(name in package_name(), version in proptest::option::of(version_token())) {
        let remove = action_args(&ActionRequest::new(PackageAction::Remove, name.clone(), version.as_deref()));
        let purge = action_args(&ActionRequest::new(PackageAction::Purge, name, version.as_deref()));
        prop_assert_eq!(remove, purge);
    }

    #[test]
    fn target_argument_is_last(name in package_name(), version in proptest::option::of(version_token())) {
        let args = action_args(&ActionRequest::new(PackageAction::Install, name.clone(), version.as_deref()));
        let expected = match &version {
            Some(v) => format!("{name}-{v}"),
            None => name,
        };
        prop_assert_eq!(args.last(), Some(&expected));
    }

    #[test]
    fn not_installed_has_no_installed_version(candidate in version_token()) {
        let parser = InfoParser::new().unwrap();
        let version_line = format!("Version: {candidate}");
        let state = parser.parse([version_line.as_str(), "Installed: No"]);
        prop_assert!(!state.installed);
        prop_assert_eq!(state.installed_version, None);
        prop_assert_eq!(state.candidate_version, candidate);
    }

    #[test]
    fn installed_out_of_date_reports_older_version(candidate in version_token(), older in version_token()) {
        let parser = InfoParser::new().unwrap();
        let lines = vec![
            format!("Version: {candidate}"),
            "Installed: Yes".to_string(),
            format!("Status: out-of-date (version {older} installed)"),
        ];
        let state = parser.parse(&lines);
        prop_assert!(state.installed);
        prop_assert!(state.out_of_date);
        prop_assert_eq!(state.installed_version, Some(older));
        prop_assert_eq!(state.candidate_version, candidate);
    }

    #[test]
    fn last_version_line_is_candidate(versions in proptest::collection::vec(version_token(), 1..6)) {
        let parser = InfoParser::new().unwrap();
        let mut lines: Vec<String> = versions.iter().map(|v| format!("Version: {v}")).collect();
        lines.push("Installed: Yes".to_string());
        let state = parser.parse(&lines);
        let last = versions.last().cloned();
        prop_assert_eq!(state.installed_version, last.clone());
        prop_assert_eq!(Some(state.candidate_version), last);
    }

    #[test]
    fn non_zero_exit_always_fails_query(exit_code in 1i32..255, with_version in any::<bool>()) {
        let output: &[&str] = if with_version { &["Version: 1.0", "Installed: Yes"] } else { &[] };
        let runner = ScriptedRunner::new().with_output(output).with_exit_code(exit_code);
        let result = tokio_test::block_on(manager(&runner).query_package("cups"));
        let is_query_failure = matches!(result, Err(PackageManagerError::QueryFailed { .. }));
        prop_assert!(is_query_failure);
    }
}
