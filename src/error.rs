//! Error types for debmatrix
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::defaults::LAUNCH_FAILURE_EXIT_CODE;
use crate::core::plan::BuildTask;

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read catalog file
    #[error("Failed to read catalog file '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Failed to parse catalog file
    #[error("Failed to parse catalog file '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// Catalog lists no packages
    #[error("Catalog contains no packages")]
    NoPackages,

    /// Package lists no versions
    #[error("Package '{package}' has no versions")]
    NoVersions { package: String },

    /// Empty architecture list
    #[error("No architectures to build for")]
    NoArchitectures,

    /// Empty distribution list
    #[error("No distributions to build for")]
    NoDistros,
}

/// The build tool could not be started
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Program not found in PATH
    #[error("Build tool '{program}' not found: {error}")]
    NotFound { program: String, error: String },

    /// Spawning or waiting on the process failed
    #[error("Failed to run build tool '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

/// Matrix run errors
///
/// Every variant is fatal to the whole run.
#[derive(Error, Debug)]
pub enum RunError {
    /// The build tool could not be launched for a task
    #[error("Could not launch build for {task}: {source}")]
    LaunchFailed {
        task: BuildTask,
        #[source]
        source: LaunchError,
    },

    /// The build tool exited non-zero for a task
    #[error("Build failed for {task} with exit status {code}")]
    TaskFailed { task: BuildTask, code: i32 },
}

impl RunError {
    /// Exit code the whole process should terminate with
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LaunchFailed { .. } => LAUNCH_FAILURE_EXIT_CODE,
            Self::TaskFailed { code, .. } => *code,
        }
    }

    /// The task that stopped the run
    pub fn task(&self) -> &BuildTask {
        match self {
            Self::LaunchFailed { task, .. } | Self::TaskFailed { task, .. } => task,
        }
    }
}

/// Top-level debmatrix error type
#[derive(Error, Debug)]
pub enum MatrixError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Run error
    #[error(transparent)]
    Run(#[from] RunError),
}

/// Find the [`RunError`] that stopped the run, if any
pub fn find_run_error(error: &anyhow::Error) -> Option<&RunError> {
    error.chain().find_map(|cause| {
        cause
            .downcast_ref::<RunError>()
            .or_else(|| match cause.downcast_ref::<MatrixError>() {
                Some(MatrixError::Run(run)) => Some(run),
                _ => None,
            })
    })
}

/// Resolve the process exit code for any error bubbling up to `main`
///
/// A [`RunError`] anywhere in the chain propagates its own code; anything
/// else is a generic failure.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    find_run_error(error).map_or(LAUNCH_FAILURE_EXIT_CODE, RunError::exit_code)
}
