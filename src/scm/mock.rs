use crate::error::{PublishError, Result};
use crate::scm::SourceControl;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mock source control for testing without a git repository
#[derive(Debug)]
pub struct MockSourceControl {
    commit: String,
    on_git: bool,
    tagged_latest: AtomicBool,
    latest_queries: AtomicUsize,
}

impl MockSourceControl {
    /// Create a mock checked out at `commit`, not tagged latest
    pub fn new(commit: impl Into<String>) -> Self {
        MockSourceControl {
            commit: commit.into(),
            on_git: true,
            tagged_latest: AtomicBool::new(false),
            latest_queries: AtomicUsize::new(0),
        }
    }

    /// A mock that behaves as if run outside any git checkout
    pub fn outside_git() -> Self {
        MockSourceControl {
            on_git: false,
            ..Self::new("")
        }
    }

    /// Set the answer for [SourceControl::is_tagged_latest]
    pub fn set_tagged_latest(&self, latest: bool) {
        self.tagged_latest.store(latest, Ordering::SeqCst);
    }

    /// Builder form of [MockSourceControl::set_tagged_latest]
    pub fn with_tagged_latest(self, latest: bool) -> Self {
        self.set_tagged_latest(latest);
        self
    }

    /// How many times the latest tag was queried
    pub fn latest_queries(&self) -> usize {
        self.latest_queries.load(Ordering::SeqCst)
    }
}

impl SourceControl for MockSourceControl {
    fn is_git_checkout(&self) -> bool {
        self.on_git
    }

    fn current_commit(&self) -> Result<String> {
        if !self.on_git {
            return Err(PublishError::NotOnGit);
        }
        Ok(self.commit.clone())
    }

    fn is_tagged_latest(&self, _commit: &str) -> Result<bool> {
        self.latest_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.tagged_latest.load(Ordering::SeqCst))
    }
}
