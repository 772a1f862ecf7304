//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use commands::{Commands, MatrixArgs};
use output::OutputConfig;

/// Debmatrix - matrix build driver for deb packages
///
/// Runs the package build tool once per package version, architecture and
/// distribution, stopping at the first failure.
#[derive(Parser, Debug)]
#[command(name = "debmatrix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v to show build tool command lines)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub matrix: MatrixArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output settings selected by the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the CLI command
    ///
    /// Without a subcommand the full matrix is built.
    pub fn run(self) -> Result<()> {
        let output = self.output_config();
        let catalog = self.matrix.load_catalog()?;

        match self.command.unwrap_or(Commands::Build) {
            Commands::Build => commands::build::execute(&catalog, &output),
            Commands::Plan => commands::plan::execute(&catalog, &output),
        }
    }
}
