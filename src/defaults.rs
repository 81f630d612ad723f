//! Default values for repo-images.
//!
//! This module provides centralized default values used across phases,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Returns the directory under which unconfigured repositories are cloned.
///
/// Uses `HOME` when it is set and non-empty, and falls back to the platform
/// home directory otherwise. Returns `None` when neither is available.
pub fn default_checkout_root() -> Option<PathBuf> {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home)),
        _ => dirs::home_dir(),
    }
}
