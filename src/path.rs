//! Path manipulation utilities for repo-images

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the current user's home directory.
///
/// Paths that do not start with `~/` are returned unchanged, including a bare
/// `~` and `~user/...` forms.
pub fn expand_tilde(path: &str) -> Result<PathBuf> {
    if !path.starts_with("~/") {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().ok_or_else(|| Error::HomeDir {
        message: format!("needed to expand {}", path),
    })?;
    Ok(expand_tilde_with(path, &home))
}

/// Expand a leading `~/` against an explicit home directory.
pub fn expand_tilde_with(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// The last path segment of a repository URL, without a `.git` suffix.
///
/// Works for both URL and scp-like (`git@host:org/repo.git`) forms.
pub fn repo_short_name(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Join `sub_path` onto `repo_dir`, keeping the result inside `repo_dir`.
///
/// Leading `/` separators are dropped so an absolute-looking key such as
/// `/docker` still names a directory in the checkout.
pub fn join_sub_path(repo_dir: &Path, sub_path: &str) -> PathBuf {
    repo_dir.join(sub_path.trim_start_matches('/'))
}

/// Build the default checkout location `<home>/<suffix>_<short name>`.
pub fn default_local_dir(home: &Path, suffix: &str, url: &str) -> PathBuf {
    home.join(format!("{}_{}", suffix, repo_short_name(url)))
}
