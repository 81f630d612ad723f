//! The two phases of a repo-images run.
//!
//! ## Overview
//!
//! 1. Sync - clone or pull every matching repository
//! 2. Build - build an image from every matching sub-path
//!
//! Either phase can be skipped. Both take a [`Filter`]: sync matches it
//! against repository URLs, build matches it against image names.

pub mod build;
pub mod orchestrator;
pub mod sync;

/// A substring filter applied to repository URLs and image names.
///
/// The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter(String);

impl Filter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Returns `true` if `candidate` contains the filter text.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.contains(self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
