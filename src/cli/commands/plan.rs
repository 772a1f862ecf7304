//! Plan command implementation
//!
//! Implements `debmatrix plan`: print every task the build would run, in run
//! order, without invoking the build tool.

use anyhow::{Context, Result};

use crate::cli::output::OutputConfig;
use crate::core::catalog::Catalog;
use crate::core::plan::{plan_catalog, BuildTask};

/// Execute the plan command
pub fn execute(catalog: &Catalog, output: &OutputConfig) -> Result<()> {
    let tasks = plan_catalog(catalog);
    println!("{}", render(&tasks, output.json)?);
    Ok(())
}

/// Render the plan as text (one task per line) or as a JSON array
fn render(tasks: &[BuildTask], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(tasks).with_context(|| "Failed to serialize plan");
    }

    Ok(tasks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
