use crate::artifacts::ArtifactPublisher;
use crate::error::{PublishError, Result};
use std::sync::Mutex;

/// Records publish requests instead of running Gradle
#[derive(Debug, Default)]
pub struct MockArtifactPublisher {
    calls: Mutex<Vec<(String, bool)>>,
    fail_with: Option<String>,
}

impl MockArtifactPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockArtifactPublisher {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// `(version, nightly)` for every call so far
    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ArtifactPublisher for MockArtifactPublisher {
    fn publish(&self, version: &str, nightly: bool) -> Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((version.to_string(), nightly));

        match &self.fail_with {
            Some(message) => Err(PublishError::artifact(message.clone())),
            None => Ok(()),
        }
    }
}
