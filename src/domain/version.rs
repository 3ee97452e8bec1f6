//! Version strings for each publish mode
//!
//! Dry runs and nightlies derive their version from the current commit,
//! releases take it verbatim from the release tag after validation.

use crate::error::{PublishError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^v?((\d+)\.(\d+)\.(\d+)(?:-(.+))?)$").expect("version regex is valid")
    })
}

fn rc_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^rc\.\d+$").expect("rc regex is valid"))
}

/// Shorten a commit hash to `len` characters
pub fn short_commit(hash: &str, len: usize) -> &str {
    match hash.char_indices().nth(len) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}

/// Placeholder version used by dry runs (e.g. "1000.0.0-abcdef123")
pub fn dry_run_version(placeholder: &str, short_commit: &str) -> String {
    format!("{}-{}", placeholder, short_commit)
}

/// Nightly version derived from the version currently on the `next` dist-tag.
///
/// Keeps the major, bumps the minor and drops the patch, then appends the
/// date and commit:
///
/// ```ignore
/// // next = "0.81.0-rc.1", date = 2023-04-20, commit = "currentco"
/// assert_eq!(nightly_version(next, date, commit)?, "0.82.0-nightly-20230420-currentco");
/// ```
pub fn nightly_version(next_version: &str, date: NaiveDate, short_commit: &str) -> Result<String> {
    let trimmed = next_version.trim();
    let next = semver::Version::parse(trimmed).map_err(|e| {
        PublishError::version(format!(
            "Cannot parse next dist-tag version '{}': {}",
            trimmed, e
        ))
    })?;

    Ok(format!(
        "{}.{}.0-nightly-{}-{}",
        next.major,
        next.minor + 1,
        date.format("%Y%m%d"),
        short_commit
    ))
}

/// A version taken from a release tag, split into its components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    /// Full version without any leading `v`
    pub version: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
}

impl ReleaseVersion {
    /// Parse a tag like "v0.81.1" or "0.81.0-rc.4"
    pub fn parse(tag: &str) -> Result<Self> {
        let caps = version_regex()
            .captures(tag.trim())
            .ok_or_else(|| PublishError::version(format!("Invalid version format: '{}'", tag)))?;

        let number = |idx: usize| -> Result<u64> {
            caps[idx].parse::<u64>().map_err(|_| {
                PublishError::version(format!("Invalid version component in '{}'", tag))
            })
        };

        Ok(ReleaseVersion {
            version: caps[1].to_string(),
            major: number(2)?,
            minor: number(3)?,
            patch: number(4)?,
            prerelease: caps.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// Parse a tag and reject anything that may not be published as a release
    pub fn parse_for_release(tag: &str) -> Result<Self> {
        let version = Self::parse(tag).map_err(|_| PublishError::InvalidRelease(tag.to_string()))?;
        version.validate_for_release()?;
        Ok(version)
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// A stable release is `0.x.y` with x > 0; a stable prerelease is `0.x.0-rc.N`
    pub fn validate_for_release(&self) -> Result<()> {
        let stable_line = self.major == 0 && self.minor != 0;
        let valid = match &self.prerelease {
            None => stable_line,
            Some(pre) => stable_line && self.patch == 0 && rc_regex().is_match(pre),
        };

        if valid {
            Ok(())
        } else {
            Err(PublishError::InvalidRelease(self.version.clone()))
        }
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}
