//! Maven artifact publishing
//!
//! Android artifacts are versioned together with the npm package and
//! published right after it.

pub mod gradle;
pub mod mock;

pub use gradle::GradleArtifactPublisher;
pub use mock::MockArtifactPublisher;

use crate::error::Result;

/// Publishes the platform artifacts that accompany an npm release
pub trait ArtifactPublisher: Send + Sync {
    /// Publish artifacts for `version`
    ///
    /// # Arguments
    /// * `version` - The version just published to npm
    /// * `nightly` - Whether this is a nightly build
    fn publish(&self, version: &str, nightly: bool) -> Result<()>;
}

/// Used when artifact publishing is turned off in the configuration
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledArtifactPublisher;

impl ArtifactPublisher for DisabledArtifactPublisher {
    fn publish(&self, version: &str, _nightly: bool) -> Result<()> {
        tracing::info!(version, "artifacts: publishing disabled, skipping");
        Ok(())
    }
}
