//! Build command implementation
//!
//! Implements `debmatrix build`, the default command: plan the matrix and run
//! the build tool for every task, stopping at the first failure.

use anyhow::Result;

use crate::cli::output::{status, OutputConfig};
use crate::core::catalog::Catalog;
use crate::core::runner::run_matrix;
use crate::infra::process::SystemProcessRunner;

/// Execute the build command
pub fn execute(catalog: &Catalog, output: &OutputConfig) -> Result<()> {
    let summary = run_matrix(catalog, SystemProcessRunner::new())?;

    if !output.quiet {
        println!("{} Build complete!", status::SUCCESS);
        println!("  Tasks built: {}", summary.tasks_built);
    }

    Ok(())
}
