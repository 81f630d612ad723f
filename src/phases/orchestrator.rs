//! Orchestrator for a complete run
//!
//! This module coordinates the sync and build phases over one parsed
//! configuration. The sync phase runs first so that directories it assigns
//! are visible to the build phase.

use std::path::PathBuf;

use super::build::{self, BuildReport};
use super::sync::{SyncReport, Synchronizer};
use super::Filter;
use crate::config::Config;
use crate::container::BuildOperations;
use crate::error::Result;
use crate::output::{Reporter, Tone};
use crate::repository::RepositoryManager;
use crate::suffix::SuffixGenerator;

/// What a run should do.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Configure the git credential cache before the first clone or pull.
    pub credential_cache: bool,
    /// Skip the sync phase.
    pub only_build: bool,
    /// Skip the build phase.
    pub only_download: bool,
    /// Restricts sync by repository URL and build by image name.
    pub filter: Filter,
    /// Parent directory for repositories without `localDir`.
    pub checkout_root: Option<PathBuf>,
    /// Fixed suffix generator; seeded from the clock when `None`.
    pub suffixes: Option<SuffixGenerator>,
}

/// Outcome of a run; a phase that was skipped has no report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub sync: Option<SyncReport>,
    pub build: Option<BuildReport>,
}

/// Execute the sync and build phases.
///
/// Returns early with the error if the sync phase fails; build failures are
/// recorded in the report instead.
pub fn execute_run(
    config: &mut Config,
    options: &RunOptions,
    repo_manager: &RepositoryManager,
    builder: &dyn BuildOperations,
    reporter: &Reporter,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    // Phase 1: Sync
    if options.only_build {
        reporter.line("Not cloning/pulling at all.", Tone::Alert);
    } else {
        let mut synchronizer = Synchronizer::new(repo_manager, options.checkout_root.clone())
            .with_credential_cache(options.credential_cache);
        if let Some(suffixes) = &options.suffixes {
            synchronizer = synchronizer.with_suffixes(suffixes.clone());
        }
        report.sync = Some(synchronizer.execute(config, &options.filter, reporter)?);
    }

    // Phase 2: Build
    if options.only_download {
        reporter.line("Not building at all.", Tone::Alert);
    } else {
        report.build = Some(build::execute(config, &options.filter, builder, reporter));
    }

    log::debug!(
        "run finished: synced={} built={}",
        report.sync.as_ref().map_or(0, |s| s.synced.len()),
        report.build.as_ref().map_or(0, |b| b.built.len())
    );

    Ok(report)
}
