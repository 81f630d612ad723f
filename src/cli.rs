//! CLI argument parsing and run dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::{debug, warn};

use repo_images::config;
use repo_images::container::{DefaultBuildOperations, DEFAULT_BUILD_TOOL};
use repo_images::defaults::default_checkout_root;
use repo_images::output::{OutputConfig, Reporter};
use repo_images::phases::orchestrator::{self, RunOptions};
use repo_images::phases::Filter;
use repo_images::repository::RepositoryManager;

/// Clone or pull git repositories, then build container images from them
#[derive(Parser, Debug)]
#[command(name = "repo-images")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file containing repo urls and image names and locations
    /// (long flags take two dashes: `--config`, not `-config`)
    #[arg(long, value_name = "PATH", env = "REPO_IMAGES_CONFIG")]
    config: PathBuf,

    /// Should git cache credentials?
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    credcache: bool,

    /// Do not git pull/clone, only build images. Repos without a localDir
    /// have no known checkout and their images are skipped
    #[arg(
        long,
        alias = "only-build",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    onlybuild: bool,

    /// Only git pull/clone, do not build images
    #[arg(
        long,
        alias = "only-download",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    onlydownload: bool,

    /// Only download repos whose url contains this substring, only build
    /// images whose name contains it
    #[arg(long, value_name = "SUBSTRING", default_value = "")]
    only: String,

    /// Container build tool, invoked as `<tool> build -t <image> <dir>`
    #[arg(
        long,
        value_name = "BIN",
        env = "REPO_IMAGES_BUILD_TOOL",
        default_value = DEFAULT_BUILD_TOOL
    )]
    build_tool: String,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

impl Cli {
    /// Execute the run described by the flags
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let reporter = Reporter::new(OutputConfig::from_env_and_flag(&self.color));

        let mut config = config::from_file(&self.config)?;
        debug!(
            "loaded {} repositories from {}",
            config.len(),
            self.config.display()
        );

        let options = RunOptions {
            credential_cache: self.credcache,
            only_build: self.onlybuild,
            only_download: self.onlydownload,
            filter: Filter::new(self.only),
            checkout_root: default_checkout_root(),
            suffixes: None,
        };

        let repo_manager = RepositoryManager::new(reporter.clone());
        let builder = DefaultBuildOperations::new(self.build_tool, reporter.clone());

        let report =
            orchestrator::execute_run(&mut config, &options, &repo_manager, &builder, &reporter)?;

        if let Some(build) = &report.build {
            if !build.failed.is_empty() {
                let names: Vec<&str> = build.failed.iter().map(|(image, _)| image.as_str()).collect();
                warn!("{} image(s) failed to build: {}", names.len(), names.join(", "));
            }
        }

        Ok(())
    }
}

/// Log to stderr at `level`; `RUST_LOG`, when set, takes precedence.
fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.format_timestamp(None);
    // A second initialization only happens in tests
    let _ = builder.try_init();
}
