//! Parser for `rug info` output

use crate::modules::{error::PackageManagerError, system::package_managers::InstalledState};
use regex::Regex;
use tracing::debug;

/// Fields collected while scanning `rug info` output.
///
/// Each matching line replaces the previous value of the fields it touches, so the last
/// matching line wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoAccumulator {
    pub installed: bool,
    pub version: String,
    pub out_of_date: bool,
    pub out_of_date_version: String,
}

impl InfoAccumulator {
    /// Turn the scanned fields into an installed/candidate state.
    ///
    /// `version` is always the candidate. An empty candidate is returned as-is; rejecting it
    /// is up to the caller.
    pub fn derive(self) -> InstalledState {
        if !self.installed {
            debug!("rug installed false");
            return InstalledState {
                installed: false,
                installed_version: None,
                candidate_version: self.version,
                out_of_date: false,
            };
        }

        if self.out_of_date {
            debug!("rug installed outofdate");
            InstalledState {
                installed: true,
                installed_version: Some(self.out_of_date_version),
                candidate_version: self.version,
                out_of_date: true,
            }
        } else {
            debug!("rug installed");
            InstalledState {
                installed: true,
                installed_version: Some(self.version.clone()),
                candidate_version: self.version,
                out_of_date: false,
            }
        }
    }
}

pub struct InfoParser {
    version_regex: Regex,
    installed_yes_regex: Regex,
    installed_no_regex: Regex,
    out_of_date_regex: Regex,
}

impl InfoParser {
    pub fn new() -> Result<Self, PackageManagerError> {
        Ok(Self {
            version_regex: Regex::new(r"^Version: (.+)$")?,
            installed_yes_regex: Regex::new(r"^Installed: Yes$")?,
            installed_no_regex: Regex::new(r"^Installed: No$")?,
            out_of_date_regex: Regex::new(r"^Status: out-of-date \(version (.+) installed\)$")?,
        })
    }

    /// Apply one output line to the accumulator, returning the updated copy
    pub fn apply(&self, acc: InfoAccumulator, line: &str) -> InfoAccumulator {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(caps) = self.version_regex.captures(line) {
            let version = caps[1].to_string();
            debug!("rug version={version}");
            InfoAccumulator { version, ..acc }
        } else if self.installed_yes_regex.is_match(line) {
            debug!("rug installed true");
            InfoAccumulator {
                installed: true,
                ..acc
            }
        } else if self.installed_no_regex.is_match(line) {
            debug!("rug installed false");
            InfoAccumulator {
                installed: false,
                ..acc
            }
        } else if let Some(caps) = self.out_of_date_regex.captures(line) {
            let out_of_date_version = caps[1].to_string();
            debug!("rug out of date version={out_of_date_version}");
            InfoAccumulator {
                out_of_date: true,
                out_of_date_version,
                ..acc
            }
        } else {
            acc
        }
    }

    /// Fold every line of the output into a single accumulator
    pub fn scan<I, S>(&self, lines: I) -> InfoAccumulator
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .fold(InfoAccumulator::default(), |acc, line| {
                self.apply(acc, line.as_ref())
            })
    }

    pub fn parse<I, S>(&self, lines: I) -> InstalledState
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scan(lines).derive()
    }
}
