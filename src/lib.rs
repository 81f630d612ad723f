//! # repo-images
//!
//! Keeps a set of git checkouts up to date and builds container images from
//! sub-directories of them.
//!
//! ## Quick Example
//!
//! ```
//! use repo_images::config;
//!
//! let yaml = r#"
//! https://github.com/example/services.git:
//!   localDir: ~/src/services
//!   api: example/api
//! "#;
//! let config = config::parse(yaml).unwrap();
//! let entry = config.get("https://github.com/example/services.git").unwrap();
//! assert_eq!(entry.local_dir.as_deref(), Some("~/src/services"));
//! assert_eq!(entry.targets[0].image, "example/api");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the YAML mapping of repository URLs to a
//!   checkout directory and (sub-path, image) pairs.
//! - **Checkouts (`repository`, `git`)**: clone-or-pull with a check that an
//!   existing checkout tracks the configured remote.
//! - **Builds (`container`)**: `docker build -t <image> <dir>` or any tool
//!   with the same interface.
//! - **Phases (`phases`)**: sync then build, each filtered by substring.
//!
//! ## Execution Flow
//!
//! 1.  **Sync**: for each matching repository, pick its directory (assigning
//!     `<home>/<suffix>_<name>` when none is configured), then clone or pull.
//!     The first failure ends the run.
//! 2.  **Build**: for each matching image, build its sub-path if it is a
//!     directory. Failures are logged and the next image is built.

pub mod config;
pub mod container;
pub mod defaults;
pub mod error;
pub mod git;
pub mod output;
pub mod path;
pub mod phases;
pub mod repository;
pub mod suffix;

#[cfg(test)]
mod path_proptest;
