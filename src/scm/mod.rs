//! Source control abstraction layer
//!
//! The publisher needs three facts from git: whether it is running inside a
//! checkout at all, the current commit, and whether that commit carries the
//! `latest` tag set by the release trigger.
//!
//! - [repository::Git2SourceControl]: real implementation using the `git2` crate
//! - [mock::MockSourceControl]: mock implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockSourceControl;
pub use repository::Git2SourceControl;

use crate::error::Result;

/// Name of the git tag that marks the newest stable release line
pub const LATEST_TAG: &str = "latest";

/// Common source control trait for abstraction
///
/// All implementors must be `Send + Sync`.
pub trait SourceControl: Send + Sync {
    /// Whether the process runs inside a git checkout
    fn is_git_checkout(&self) -> bool;

    /// Full hash of the checked-out commit
    ///
    /// # Returns
    /// * `Ok(String)` - Hex hash of HEAD
    /// * `Err` - Not in a checkout, or HEAD cannot be resolved
    fn current_commit(&self) -> Result<String>;

    /// Whether the `latest` tag points at `commit`
    ///
    /// # Returns
    /// * `Ok(true)` - The tag exists and peels to `commit`
    /// * `Ok(false)` - The tag is missing or points elsewhere
    /// * `Err` - Git error
    fn is_tagged_latest(&self, commit: &str) -> Result<bool>;
}
