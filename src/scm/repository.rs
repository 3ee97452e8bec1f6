use crate::error::{PublishError, Result};
use crate::scm::{SourceControl, LATEST_TAG};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;
use std::sync::Mutex;

/// Source control backed by a git2 repository
///
/// Holds `None` when no repository could be discovered, which makes
/// [SourceControl::is_git_checkout] report false instead of failing early.
pub struct Git2SourceControl {
    repo: Option<Mutex<Git2Repo>>,
}

impl Git2SourceControl {
    /// Discover the repository containing `path`, if any
    pub fn discover<P: AsRef<Path>>(path: P) -> Self {
        let repo = match Git2Repo::discover(path.as_ref()) {
            Ok(repo) => Some(Mutex::new(repo)),
            Err(e) => {
                tracing::debug!(error = %e, "scm: no git repository found");
                None
            }
        };
        Git2SourceControl { repo }
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2SourceControl {
            repo: Some(Mutex::new(repo)),
        }
    }

    fn with_repo<T>(&self, f: impl FnOnce(&Git2Repo) -> Result<T>) -> Result<T> {
        let repo = self
            .repo
            .as_ref()
            .ok_or(PublishError::NotOnGit)?;
        let guard = repo.lock().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }
}

impl SourceControl for Git2SourceControl {
    fn is_git_checkout(&self) -> bool {
        self.repo.is_some()
    }

    fn current_commit(&self) -> Result<String> {
        self.with_repo(|repo| {
            let head = repo.head()?.peel_to_commit()?;
            Ok(head.id().to_string())
        })
    }

    fn is_tagged_latest(&self, commit: &str) -> Result<bool> {
        let commit_oid = Oid::from_str(commit)
            .map_err(|e| PublishError::version(format!("Invalid commit hash '{}': {}", commit, e)))?;

        self.with_repo(|repo| {
            let reference_name = format!("refs/tags/{}", LATEST_TAG);
            match repo.find_reference(&reference_name) {
                Ok(reference) => {
                    let tagged = reference.peel_to_commit()?.id();
                    Ok(tagged == commit_oid)
                }
                Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
                Err(e) => Err(e.into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo_with_commit() -> (TempDir, Git2Repo, Oid) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let oid = commit(&repo, "initial");
        (dir, repo, oid)
    }

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit> = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => vec![],
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    #[test]
    fn test_outside_git() {
        let scm = Git2SourceControl { repo: None };
        assert!(!scm.is_git_checkout());
        assert!(scm.current_commit().is_err());
    }

    #[test]
    fn test_current_commit() {
        let (_dir, repo, oid) = init_repo_with_commit();
        let scm = Git2SourceControl::from_git2(repo);
        assert!(scm.is_git_checkout());
        assert_eq!(scm.current_commit().unwrap(), oid.to_string());
    }

    #[test]
    fn test_latest_tag_missing() {
        let (_dir, repo, oid) = init_repo_with_commit();
        let scm = Git2SourceControl::from_git2(repo);
        assert!(!scm.is_tagged_latest(&oid.to_string()).unwrap());
    }

    #[test]
    fn test_latest_tag_on_head() {
        let (_dir, repo, oid) = init_repo_with_commit();
        let object = repo.find_object(oid, None).unwrap();
        repo.tag_lightweight(LATEST_TAG, &object, false).unwrap();
        drop(object);

        let scm = Git2SourceControl::from_git2(repo);
        assert!(scm.is_tagged_latest(&oid.to_string()).unwrap());
    }

    #[test]
    fn test_latest_tag_on_older_commit() {
        let (_dir, repo, first) = init_repo_with_commit();
        let object = repo.find_object(first, None).unwrap();
        repo.tag_lightweight(LATEST_TAG, &object, false).unwrap();
        drop(object);
        let second = commit(&repo, "second");

        let scm = Git2SourceControl::from_git2(repo);
        assert!(!scm.is_tagged_latest(&second.to_string()).unwrap());
        assert!(scm.is_tagged_latest(&first.to_string()).unwrap());
    }
}
