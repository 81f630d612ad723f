//! # Phase 1: Repository Sync
//!
//! Brings every configured repository whose URL matches the filter up to
//! date on disk. Repositories without a `localDir` get a fresh directory
//! under the checkout root named `<suffix>_<repo>`; the chosen directory is
//! written back into the in-memory config so the build phase uses it too.
//!
//! Any failure ends the phase: a checkout that is missing, foreign or
//! unreachable leaves nothing trustworthy to build from.

use std::path::PathBuf;

use log::{debug, warn};

use super::Filter;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{Reporter, Tone};
use crate::path::{default_local_dir, expand_tilde};
use crate::repository::{CheckoutAction, RepositoryManager};
use crate::suffix::SuffixGenerator;

/// Outcome of the sync phase.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Repositories that were cloned or pulled, with what was done.
    pub synced: Vec<(String, CheckoutAction)>,
    /// URLs that did not match the filter.
    pub filtered_out: Vec<String>,
}

/// Settings and state for one run of the sync phase.
pub struct Synchronizer<'a> {
    manager: &'a RepositoryManager,
    checkout_root: Option<PathBuf>,
    suffixes: SuffixGenerator,
    credential_cache: bool,
    credentials_configured: bool,
}

impl<'a> Synchronizer<'a> {
    /// Create a synchronizer that places unconfigured checkouts under
    /// `checkout_root`.
    pub fn new(manager: &'a RepositoryManager, checkout_root: Option<PathBuf>) -> Self {
        Self {
            manager,
            checkout_root,
            suffixes: SuffixGenerator::new(),
            credential_cache: false,
            credentials_configured: false,
        }
    }

    /// Configure the git credential cache before the first clone or pull.
    pub fn with_credential_cache(mut self, enabled: bool) -> Self {
        self.credential_cache = enabled;
        self
    }

    /// Use a specific suffix generator.
    pub fn with_suffixes(mut self, suffixes: SuffixGenerator) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Sync every repository in `config` whose URL matches `filter`.
    pub fn execute(&mut self, config: &mut Config, filter: &Filter, reporter: &Reporter) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        for repo in &mut config.repos {
            if !filter.matches(&repo.url) {
                reporter.line(
                    &format!(
                        "Not cloning/pulling {} as it doesn't match {}",
                        repo.url,
                        filter.as_str()
                    ),
                    Tone::Skip,
                );
                report.filtered_out.push(repo.url.clone());
                continue;
            }

            reporter.line("About to git clone/pull repo:", Tone::Action);
            reporter.line(&repo.url, Tone::Subject);

            let dir = match repo.entry.local_dir.as_deref() {
                Some(configured) => expand_tilde(configured)?,
                None => self.assign_default_dir(&repo.url, reporter)?,
            };
            // Store the resolved form so the build phase sees the same path
            repo.entry.local_dir = Some(dir.display().to_string());

            self.configure_credentials();

            let action = self.manager.clone_or_pull(&repo.url, &dir)?;
            debug!("{} is up to date in {}", repo.url, action.dir().display());
            report.synced.push((repo.url.clone(), action));
            reporter.separator();
        }

        Ok(report)
    }

    fn assign_default_dir(&mut self, url: &str, reporter: &Reporter) -> Result<PathBuf> {
        reporter.line(
            "No localDir specified for this repo. It will be cloned to a random dir.",
            Tone::Notice,
        );
        let root = self.checkout_root.as_deref().ok_or_else(|| Error::HomeDir {
            message: format!("needed to place a checkout for {}", url),
        })?;
        let dir = default_local_dir(root, &self.suffixes.next_suffix(), url);
        reporter.line("Random dir for this repo is:", Tone::Notice);
        reporter.line(&dir.display().to_string(), Tone::Subject);
        Ok(dir)
    }

    fn configure_credentials(&mut self) {
        if !self.credential_cache || self.credentials_configured {
            return;
        }
        self.credentials_configured = true;
        if let Err(e) = self.manager.enable_credential_cache() {
            warn!("could not enable the git credential cache: {}", e);
        }
    }
}
