//! # Repository Checkouts
//!
//! This module provides the `RepositoryManager`, which brings a single local
//! checkout in line with its configured URL: clone when the directory is
//! missing, otherwise confirm the checkout tracks the same remote and pull.
//!
//! ## Design
//!
//! Git access goes through the **`GitOperations`** trait. The application uses
//! `DefaultGitOperations`, which runs the system `git` binary; tests swap in a
//! mock that records calls and answers remote lookups from a table, so the
//! clone-or-pull decision can be exercised without a network or a git binary.

use crate::error::{Error, Result};
use crate::output::{Reporter, Tone};
use std::path::{Path, PathBuf};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Shallow-clone (`--depth 1`) `url` into `target_dir`.
    fn clone_shallow(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Pull the latest changes into the checkout at `repo_dir`.
    fn pull(&self, url: &str, repo_dir: &Path) -> Result<()>;

    /// Read the origin remote URL of the checkout at `repo_dir`.
    fn remote_origin_url(&self, repo_dir: &Path) -> Result<String>;

    /// Configure git to cache credentials.
    fn enable_credential_cache(&self) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command to perform real Git operations.
pub struct DefaultGitOperations {
    reporter: Reporter,
}

impl DefaultGitOperations {
    pub fn new(reporter: Reporter) -> Self {
        Self { reporter }
    }
}

impl GitOperations for DefaultGitOperations {
    fn clone_shallow(&self, url: &str, target_dir: &Path) -> Result<()> {
        crate::git::clone_shallow(url, target_dir, &self.reporter)
    }

    fn pull(&self, url: &str, repo_dir: &Path) -> Result<()> {
        crate::git::pull(url, repo_dir, &self.reporter)
    }

    fn remote_origin_url(&self, repo_dir: &Path) -> Result<String> {
        crate::git::remote_origin_url(repo_dir, &self.reporter)
    }

    fn enable_credential_cache(&self) -> Result<()> {
        crate::git::enable_credential_cache(&self.reporter)
    }
}

/// What happened to a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutAction {
    /// The directory did not exist and the repository was cloned into it.
    Cloned(PathBuf),
    /// The directory already held the repository and it was pulled.
    Pulled(PathBuf),
}

impl CheckoutAction {
    /// The checkout directory that was acted on.
    pub fn dir(&self) -> &Path {
        match self {
            CheckoutAction::Cloned(dir) | CheckoutAction::Pulled(dir) => dir,
        }
    }
}

/// Keeps local checkouts in step with their remotes.
pub struct RepositoryManager {
    git_ops: Box<dyn GitOperations>,
    reporter: Reporter,
}

impl RepositoryManager {
    /// Creates a `RepositoryManager` that runs the system `git`.
    pub fn new(reporter: Reporter) -> Self {
        Self {
            git_ops: Box::new(DefaultGitOperations::new(reporter.clone())),
            reporter,
        }
    }

    /// Creates a `RepositoryManager` with a custom `GitOperations`
    /// implementation.
    pub fn with_operations(git_ops: Box<dyn GitOperations>, reporter: Reporter) -> Self {
        Self { git_ops, reporter }
    }

    /// Enable the git credential cache.
    pub fn enable_credential_cache(&self) -> Result<()> {
        self.git_ops.enable_credential_cache()
    }

    /// Clone `url` into `dir`, or pull if `dir` already holds it.
    ///
    /// Fails if `dir` is a file, is not a git checkout, or tracks a different
    /// origin than `url`.
    pub fn clone_or_pull(&self, url: &str, dir: &Path) -> Result<CheckoutAction> {
        let metadata = match std::fs::metadata(dir) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.git_ops.clone_shallow(url, dir)?;
                return Ok(CheckoutAction::Cloned(dir.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        if !metadata.is_dir() {
            return Err(Error::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        self.verify_remote(url, dir)?;
        self.git_ops.pull(url, dir)?;
        Ok(CheckoutAction::Pulled(dir.to_path_buf()))
    }

    fn verify_remote(&self, url: &str, dir: &Path) -> Result<()> {
        let actual = match self.git_ops.remote_origin_url(dir) {
            Ok(actual) => actual,
            Err(e) => {
                self.reporter.line(
                    &format!("Directory {} is not a git repo.", dir.display()),
                    Tone::Alert,
                );
                return Err(e);
            }
        };

        let actual = actual.trim();
        if actual != url {
            self.reporter.line(
                &format!(
                    "The origin url of the repo in {} is not the same as the url from the config file.",
                    dir.display()
                ),
                Tone::Alert,
            );
            self.reporter
                .line(&format!("From config file: {}", url), Tone::Subject);
            self.reporter
                .line(&format!("Repo origin remote: {}", actual), Tone::Subject);
            return Err(Error::RemoteMismatch {
                path: dir.to_path_buf(),
                expected: url.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{GitCall, MockGitOperations};
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const URL: &str = "https://example.com/a.git";

    fn manager(git_ops: &MockGitOperations) -> RepositoryManager {
        RepositoryManager::with_operations(Box::new(git_ops.clone()), Reporter::plain())
    }

    #[test]
    fn test_missing_dir_is_cloned() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a");
        let git_ops = MockGitOperations::new();

        let action = manager(&git_ops).clone_or_pull(URL, &dir).unwrap();

        assert_eq!(action, CheckoutAction::Cloned(dir.clone()));
        assert_eq!(git_ops.calls(), vec![GitCall::Clone(URL.to_string(), dir)]);
    }

    #[test]
    fn test_existing_checkout_with_matching_remote_is_pulled() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();
        let git_ops = MockGitOperations::new().with_remote(&dir, URL);

        let action = manager(&git_ops).clone_or_pull(URL, &dir).unwrap();

        assert_eq!(action, CheckoutAction::Pulled(dir.clone()));
        assert_eq!(
            git_ops.calls(),
            vec![
                GitCall::RemoteUrl(dir.clone()),
                GitCall::Pull(URL.to_string(), dir)
            ]
        );
    }

    #[test]
    fn test_remote_with_trailing_newline_matches() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();
        let git_ops = MockGitOperations::new().with_remote(&dir, "https://example.com/a.git\n");

        let action = manager(&git_ops).clone_or_pull(URL, &dir).unwrap();
        assert!(matches!(action, CheckoutAction::Pulled(_)));
    }

    #[test]
    fn test_mismatched_remote_is_rejected_without_pull() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();
        let git_ops = MockGitOperations::new().with_remote(&dir, "https://example.com/other.git");

        let err = manager(&git_ops).clone_or_pull(URL, &dir).unwrap_err();

        match err {
            Error::RemoteMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, URL);
                assert_eq!(actual, "https://example.com/other.git");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(git_ops.calls(), vec![GitCall::RemoteUrl(dir)]);
    }

    #[test]
    fn test_directory_that_is_not_a_repo_fails() {
        let temp_dir = TempDir::new().unwrap();
        let git_ops = MockGitOperations::new();

        let err = manager(&git_ops)
            .clone_or_pull(URL, temp_dir.path())
            .unwrap_err();
        assert!(matches!(err, Error::NotARepository { .. }));
    }

    #[test]
    fn test_file_in_place_of_checkout_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a");
        fs::write(&file, "not a dir").unwrap();
        let git_ops = MockGitOperations::new();

        let err = manager(&git_ops).clone_or_pull(URL, &file).unwrap_err();

        assert!(matches!(err, Error::NotADirectory { .. }));
        assert!(err.to_string().contains("exists and is not a directory"));
        assert!(git_ops.calls().is_empty());
    }

    #[test]
    fn test_clone_error_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let git_ops = MockGitOperations::new().with_error("Network error");

        let err = manager(&git_ops)
            .clone_or_pull(URL, &temp_dir.path().join("a"))
            .unwrap_err();
        assert!(err.to_string().contains("Network error"));
    }
}
