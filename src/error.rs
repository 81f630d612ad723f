//! # Error Handling
//!
//! This module defines the centralized error type for `repo-images`. It uses
//! the `thiserror` library to describe every failure the library can report,
//! with enough context to tell the user what to look at.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures. Sync-phase failures (clone, pull,
//!   remote mismatch, a checkout path that is a file) surface through it and
//!   end the run. Build-phase failures are also expressed as `Error` values,
//!   but the builder only logs them.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for repo-images operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be read from disk.
    #[error("Cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file was read but does not have the expected shape.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The checkout location exists but is a file, not a directory.
    #[error("{} exists and is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The existing checkout tracks a different remote than the config names.
    #[error("Remote mismatch in {}: config has {expected}, repo origin is {actual}\n  hint: check the directory and remote url", path.display())]
    RemoteMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// The existing directory is not a git checkout, or has no origin remote.
    #[error("Directory {} is not a git repo: {message}", path.display())]
    NotARepository { path: PathBuf, message: String },

    /// A git subprocess could not be started or exited with a failure.
    #[error("Git command failed for {url}: {command} - {message}")]
    GitCommand {
        command: String,
        url: String,
        message: String,
    },

    /// The container build tool could not be started or exited with a failure.
    #[error("Build failed for image {image}: {command} - {message}")]
    BuildCommand {
        command: String,
        image: String,
        message: String,
    },

    /// No home directory could be determined for default checkout placement.
    #[error("Cannot determine home directory: {message}")]
    HomeDir { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
