//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the repository
//! configuration file and the logic for parsing it.
//!
//! The file is a single YAML mapping keyed by repository URL. Each value is a
//! mapping of strings: the reserved key `localDir` names the local checkout
//! directory, every other key is a sub-path inside the repository and its value
//! is the name of the image to build from that sub-path.
//!
//! ```yaml
//! https://github.com/example/services.git:
//!   localDir: ~/src/services
//!   api: example/api
//!   worker/docker: example/worker
//! ```
//!
//! ## Key Components
//!
//! - **`Config`**: every repository in the order it appears in the file.
//! - **`RepoEntry`**: the optional local directory plus the build targets.
//! - **`BuildTarget`**: a (sub-path, image name) pair.

use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// The configuration key that designates the local checkout directory.
pub const LOCAL_DIR_KEY: &str = "localDir";

/// A single image to build from a sub-path of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    /// Path relative to the repository root used as the build context.
    pub sub_path: String,
    /// Tag given to the built image.
    pub image: String,
}

/// Everything configured for one repository URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoEntry {
    /// Where the repository is checked out.
    ///
    /// `None` until the synchronizer assigns a default location. Once set it
    /// is shared by the sync and build phases.
    pub local_dir: Option<String>,
    /// Images built from this repository, in file order.
    pub targets: Vec<BuildTarget>,
}

/// A configured repository: its URL and entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub url: String,
    pub entry: RepoEntry,
}

/// The parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub repos: Vec<Repo>,
}

impl Config {
    /// Number of configured repositories.
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    /// Returns `true` if no repositories are configured.
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Look up the entry for a repository URL.
    pub fn get(&self, url: &str) -> Option<&RepoEntry> {
        self.repos.iter().find(|r| r.url == url).map(|r| &r.entry)
    }
}

/// Parse configuration from a YAML string.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let root: Value = serde_yaml::from_str(yaml_content)?;

    let mapping = match root {
        Value::Mapping(m) => m,
        // An empty document or a document holding only comments
        Value::Null => return Ok(Config::default()),
        other => {
            return Err(Error::ConfigParse {
                message: format!(
                    "expected a mapping of repository URLs, found {}",
                    describe(&other)
                ),
                hint: Some("The top level must look like `<repo url>: { <sub-path>: <image> }`".to_string()),
            })
        }
    };

    let mut repos = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let url = scalar_key(&key)?;
        let entry = parse_entry(&url, value)?;
        repos.push(Repo { url, entry });
    }

    Ok(Config { repos })
}

/// Read and parse the configuration file at `path`.
pub fn from_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

fn parse_entry(url: &str, value: Value) -> Result<RepoEntry> {
    let mapping: Mapping = match value {
        Value::Mapping(m) => m,
        Value::Null => return Ok(RepoEntry::default()),
        other => {
            return Err(Error::ConfigParse {
                message: format!(
                    "entry for {} must be a mapping, found {}",
                    url,
                    describe(&other)
                ),
                hint: None,
            })
        }
    };

    let mut entry = RepoEntry::default();
    for (key, value) in mapping {
        let key = scalar_key(&key)?;
        let value = match value {
            Value::String(s) => s,
            other => {
                return Err(Error::ConfigParse {
                    message: format!(
                        "value of '{}' under {} must be a string, found {}",
                        key,
                        url,
                        describe(&other)
                    ),
                    hint: Some("Quote image names and directories that YAML would read as numbers or booleans".to_string()),
                })
            }
        };

        if key == LOCAL_DIR_KEY {
            entry.local_dir = Some(value);
        } else {
            entry.targets.push(BuildTarget {
                sub_path: key,
                image: value,
            });
        }
    }

    Ok(entry)
}

/// Keys may be written unquoted, so numbers and booleans are accepted as text.
fn scalar_key(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::ConfigParse {
            message: format!("keys must be strings, found {}", describe(other)),
            hint: None,
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
