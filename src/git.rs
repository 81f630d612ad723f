//! Thin wrappers around the system `git` command.
//!
//! Using the system binary means SSH keys, credential helpers and anything
//! else configured in `~/.gitconfig` work without extra setup. Commands that
//! act on an existing checkout get the checkout as their working directory;
//! the process working directory is never changed.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::output::Reporter;

const GIT: &str = "git";

/// Clone `url` into `target_dir` with `--depth 1`.
///
/// Output from git is streamed to the console.
pub fn clone_shallow(url: &str, target_dir: &Path, reporter: &Reporter) -> Result<()> {
    let args = vec![
        "clone".to_string(),
        "--depth".to_string(),
        "1".to_string(),
        url.to_string(),
        target_dir.display().to_string(),
    ];
    reporter.command(GIT, &args);

    let status = Command::new(GIT)
        .args(&args)
        .status()
        .map_err(|e| Error::GitCommand {
            command: "clone --depth 1".to_string(),
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::GitCommand {
            command: "clone --depth 1".to_string(),
            url: url.to_string(),
            message: status.to_string(),
        });
    }
    Ok(())
}

/// Run `git pull` inside `repo_dir`.
pub fn pull(url: &str, repo_dir: &Path, reporter: &Reporter) -> Result<()> {
    let args = vec!["pull".to_string()];
    reporter.command(GIT, &args);

    let status = Command::new(GIT)
        .args(&args)
        .current_dir(repo_dir)
        .status()
        .map_err(|e| Error::GitCommand {
            command: "pull".to_string(),
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::GitCommand {
            command: "pull".to_string(),
            url: url.to_string(),
            message: format!("{} in {}", status, repo_dir.display()),
        });
    }
    Ok(())
}

/// Read `remote.origin.url` of the checkout in `repo_dir`.
///
/// The value is returned with surrounding whitespace trimmed.
pub fn remote_origin_url(repo_dir: &Path, reporter: &Reporter) -> Result<String> {
    let args = vec![
        "config".to_string(),
        "--get".to_string(),
        "remote.origin.url".to_string(),
    ];
    reporter.command(GIT, &args);

    let output = Command::new(GIT)
        .args(&args)
        .current_dir(repo_dir)
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| Error::NotARepository {
            path: repo_dir.to_path_buf(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::NotARepository {
            path: repo_dir.to_path_buf(),
            message: format!("git config --get remote.origin.url: {}", output.status),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Turn on the git credential cache for the current user.
pub fn enable_credential_cache(reporter: &Reporter) -> Result<()> {
    let args = vec![
        "config".to_string(),
        "--global".to_string(),
        "credential.helper".to_string(),
        "cache".to_string(),
    ];
    reporter.command(GIT, &args);

    let status = Command::new(GIT)
        .args(&args)
        .status()
        .map_err(|e| Error::GitCommand {
            command: "config --global credential.helper cache".to_string(),
            url: String::new(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::GitCommand {
            command: "config --global credential.helper cache".to_string(),
            url: String::new(),
            message: status.to_string(),
        });
    }
    Ok(())
}
