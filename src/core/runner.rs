//! Sequential fail-fast task execution
//!
//! Runs every task of a plan in order through a [`ProcessRunner`]. The first
//! task that cannot be launched or exits non-zero stops the run; remaining
//! tasks are never started.

use crate::core::catalog::{Catalog, ToolConfig};
use crate::core::invocation::Invocation;
use crate::core::plan::{plan_catalog, BuildTask};
use crate::error::{MatrixError, RunError};
use crate::infra::process::ProcessRunner;

/// Outcome of a fully successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of tasks built
    pub tasks_built: usize,
}

/// Executes build tasks one at a time
#[derive(Debug)]
pub struct TaskRunner<'a, R> {
    tool: &'a ToolConfig,
    process: R,
}

impl<'a, R: ProcessRunner> TaskRunner<'a, R> {
    /// Create a runner invoking `tool` through `process`
    pub fn new(tool: &'a ToolConfig, process: R) -> Self {
        Self { tool, process }
    }

    /// Run all tasks in order, stopping at the first failure
    pub fn run(&self, tasks: &[BuildTask]) -> Result<RunSummary, RunError> {
        for task in tasks {
            tracing::debug!("planning to build: {task}");
        }

        for task in tasks {
            self.run_task(task)?;
        }

        Ok(RunSummary {
            tasks_built: tasks.len(),
        })
    }

    fn run_task(&self, task: &BuildTask) -> Result<(), RunError> {
        tracing::info!("building: {task}");

        let invocation = Invocation::for_task(self.tool, task);
        tracing::trace!("running cmd: {invocation}");

        match self.process.run(&invocation) {
            Ok(0) => {
                tracing::debug!("successfully built: {task}");
                Ok(())
            }
            Ok(code) => {
                tracing::error!("error building: {task} (exit status {code})");
                Err(RunError::TaskFailed {
                    task: task.clone(),
                    code,
                })
            }
            Err(source) => {
                tracing::error!("error building: {task} ({source})");
                Err(RunError::LaunchFailed {
                    task: task.clone(),
                    source,
                })
            }
        }
    }
}

/// Plan and run a whole catalog
pub fn run_matrix<R: ProcessRunner>(
    catalog: &Catalog,
    process: R,
) -> Result<RunSummary, MatrixError> {
    catalog.validate()?;
    let tasks = plan_catalog(catalog);
    tracing::info!("Building {} tasks", tasks.len());

    let summary = TaskRunner::new(&catalog.tool, process).run(&tasks)?;
    Ok(summary)
}
