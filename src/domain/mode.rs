use crate::error::{PublishError, Result};
use std::fmt;
use std::str::FromStr;

/// Which kind of publish run to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReleaseMode {
    /// Set a placeholder version and stop before publishing
    DryRun,
    /// Publish a dated prerelease under the `nightly` dist-tag
    Nightly,
    /// Publish the version named by the release tag
    Release,
}

impl ReleaseMode {
    /// Value passed as `--build-type` to the version script
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseMode::DryRun => "dry-run",
            ReleaseMode::Nightly => "nightly",
            ReleaseMode::Release => "release",
        }
    }
}

impl FromStr for ReleaseMode {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dry-run" => Ok(ReleaseMode::DryRun),
            "nightly" => Ok(ReleaseMode::Nightly),
            "release" => Ok(ReleaseMode::Release),
            other => Err(PublishError::config(format!(
                "Unsupported build type '{}': expected dry-run, nightly or release",
                other
            ))),
        }
    }
}

impl fmt::Display for ReleaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("dry-run".parse::<ReleaseMode>().unwrap(), ReleaseMode::DryRun);
        assert_eq!("nightly".parse::<ReleaseMode>().unwrap(), ReleaseMode::Nightly);
        assert_eq!("release".parse::<ReleaseMode>().unwrap(), ReleaseMode::Release);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "prealpha".parse::<ReleaseMode>().unwrap_err();
        assert!(err.to_string().contains("prealpha"));
    }

    #[test]
    fn test_display_matches_build_type() {
        for mode in [ReleaseMode::DryRun, ReleaseMode::Nightly, ReleaseMode::Release] {
            assert_eq!(mode.to_string().parse::<ReleaseMode>().unwrap(), mode);
        }
    }
}
