//! # Phase 2: Image Build
//!
//! Builds one image per configured sub-path whose image name matches the
//! filter. Unlike the sync phase this is best effort: a missing build
//! context is skipped with a warning and a failing build is logged, and
//! either way the remaining images are still built.

use std::path::{Path, PathBuf};

use log::{error, warn};

use super::Filter;
use crate::config::Config;
use crate::container::BuildOperations;
use crate::output::{Reporter, Tone};
use crate::path::{expand_tilde, join_sub_path};

/// Why an image was not built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The image name did not match the filter.
    Filtered,
    /// The repository has no checkout directory.
    NoLocalDir,
    /// The build context does not exist.
    Missing(PathBuf),
    /// The build context is a file.
    NotADirectory(PathBuf),
}

/// Outcome of the build phase.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Images that built successfully, with their build context.
    pub built: Vec<(String, PathBuf)>,
    /// Images that were not attempted.
    pub skipped: Vec<(String, SkipReason)>,
    /// Images whose build failed, with the error message.
    pub failed: Vec<(String, String)>,
}

/// Build every matching image in `config`.
pub fn execute(
    config: &Config,
    filter: &Filter,
    builder: &dyn BuildOperations,
    reporter: &Reporter,
) -> BuildReport {
    let mut report = BuildReport::default();

    for repo in &config.repos {
        for target in &repo.entry.targets {
            if !filter.matches(&target.image) {
                reporter.line(
                    &format!(
                        "Not building {} as it doesn't match {}",
                        target.image,
                        filter.as_str()
                    ),
                    Tone::Skip,
                );
                report
                    .skipped
                    .push((target.image.clone(), SkipReason::Filtered));
                continue;
            }

            let Some(local_dir) = repo.entry.local_dir.as_deref() else {
                warn!(
                    "no local directory known for {}, not building {}",
                    repo.url, target.image
                );
                reporter.line(
                    &format!(
                        "No localDir for {} => not building {}",
                        repo.url, target.image
                    ),
                    Tone::Alert,
                );
                report
                    .skipped
                    .push((target.image.clone(), SkipReason::NoLocalDir));
                continue;
            };

            let joined = join_sub_path(Path::new(local_dir), &target.sub_path);
            let context = match expand_tilde(&joined.display().to_string()) {
                Ok(context) => context,
                Err(e) => {
                    error!("cannot resolve build context for {}: {}", target.image, e);
                    report.failed.push((target.image.clone(), e.to_string()));
                    continue;
                }
            };

            if let Some(reason) = check_context(&context) {
                let what = match &reason {
                    SkipReason::NotADirectory(_) => "is not a directory",
                    _ => "does not exist",
                };
                warn!("{} {}, not building {}", context.display(), what, target.image);
                reporter.line(
                    &format!(
                        "dir {} {} => not building {}",
                        context.display(),
                        what,
                        target.image
                    ),
                    Tone::Alert,
                );
                report.skipped.push((target.image.clone(), reason));
                continue;
            }

            match builder.build(&target.image, &context) {
                Ok(()) => report.built.push((target.image.clone(), context)),
                Err(e) => {
                    error!("{}", e);
                    report.failed.push((target.image.clone(), e.to_string()));
                }
            }
            reporter.separator();
        }
    }

    report
}

fn check_context(context: &Path) -> Option<SkipReason> {
    match std::fs::metadata(context) {
        Ok(metadata) if metadata.is_dir() => None,
        Ok(_) => Some(SkipReason::NotADirectory(context.to_path_buf())),
        Err(_) => Some(SkipReason::Missing(context.to_path_buf())),
    }
}
