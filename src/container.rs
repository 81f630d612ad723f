//! Invoking the container build tool.
//!
//! The tool is any binary that accepts `build -t <tag> <context>`; `docker`
//! by default, `podman` works as well.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::output::Reporter;

/// The build tool used when none is configured.
pub const DEFAULT_BUILD_TOOL: &str = "docker";

/// Run `<tool> build -t <image> <context>` and wait for it to finish.
pub fn build_image(tool: &str, image: &str, context: &Path, reporter: &Reporter) -> Result<()> {
    let args = vec![
        "build".to_string(),
        "-t".to_string(),
        image.to_string(),
        context.display().to_string(),
    ];
    reporter.command(tool, &args);

    let status = Command::new(tool)
        .args(&args)
        .status()
        .map_err(|e| Error::BuildCommand {
            command: format!("{} build", tool),
            image: image.to_string(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::BuildCommand {
            command: format!("{} build", tool),
            image: image.to_string(),
            message: status.to_string(),
        });
    }
    Ok(())
}

/// Trait for image builds - allows mocking in tests
pub trait BuildOperations {
    /// Build `context` and tag the result as `image`.
    fn build(&self, image: &str, context: &Path) -> Result<()>;
}

/// Builds images by running the configured build tool.
pub struct DefaultBuildOperations {
    tool: String,
    reporter: Reporter,
}

impl DefaultBuildOperations {
    pub fn new(tool: impl Into<String>, reporter: Reporter) -> Self {
        Self {
            tool: tool.into(),
            reporter,
        }
    }
}

impl BuildOperations for DefaultBuildOperations {
    fn build(&self, image: &str, context: &Path) -> Result<()> {
        build_image(&self.tool, image, context, &self.reporter)
    }
}
