//! # repo-images CLI
//!
//! This is the binary entry point for the `repo-images` command-line tool.
//!
//! It parses command-line arguments using `clap` and hands them to
//! [`cli::Cli::execute`]. All of the work happens in the `repo_images`
//! library; the binary only wires flags, logging and console output to it.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
