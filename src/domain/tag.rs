use crate::domain::version::ReleaseVersion;
use std::fmt;

/// npm dist-tag a version is published under
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishTag {
    Latest,
    Next,
    Nightly,
    /// Patch release on an older line, e.g. "0.81-stable"
    Stable { major: u64, minor: u64 },
}

impl PublishTag {
    /// Choose the dist-tag for a release.
    ///
    /// Prereleases always go to `next`. Otherwise the release becomes `latest`
    /// only when the checked-out commit carries the `latest` git tag; anything
    /// else lands on its release branch tag so npm does not move `latest`.
    pub fn for_release(version: &ReleaseVersion, is_tagged_latest: bool) -> Self {
        if version.is_prerelease() {
            PublishTag::Next
        } else if is_tagged_latest {
            PublishTag::Latest
        } else {
            PublishTag::Stable {
                major: version.major,
                minor: version.minor,
            }
        }
    }
}

impl fmt::Display for PublishTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishTag::Latest => write!(f, "latest"),
            PublishTag::Next => write!(f, "next"),
            PublishTag::Nightly => write!(f, "nightly"),
            PublishTag::Stable { major, minor } => write!(f, "{}.{}-stable", major, minor),
        }
    }
}
