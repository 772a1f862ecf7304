//! Build tool command lines
//!
//! Translates a [`BuildTask`] into the program, arguments and working
//! directory of one build tool invocation.

use std::fmt;
use std::path::PathBuf;

use crate::config::defaults::flags;
use crate::core::catalog::ToolConfig;
use crate::core::plan::BuildTask;

/// A fully resolved build tool command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run
    pub program: String,
    /// Complete argument vector
    pub args: Vec<String>,
    /// Working directory, if not the current one
    pub workdir: Option<PathBuf>,
}

impl Invocation {
    /// Build the invocation for a task
    pub fn for_task(tool: &ToolConfig, task: &BuildTask) -> Self {
        let mut args = tool.args.clone();
        args.extend(task_args(task));
        Self {
            program: tool.program.clone(),
            args,
            workdir: tool.workdir.clone(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Per-task flags understood by the build tool
///
/// `-stable` is emitted only for stable tasks and takes no value.
pub fn task_args(task: &BuildTask) -> Vec<String> {
    let mut args = vec![
        flags::ARCH.to_string(),
        task.arch.clone(),
        flags::DISTRO.to_string(),
        task.distro.clone(),
        flags::PACKAGE.to_string(),
        task.package.clone(),
        flags::VERSION.to_string(),
        task.version.clone(),
        flags::REVISION.to_string(),
        task.revision.clone(),
    ];
    if task.stable {
        args.push(flags::STABLE.to_string());
    }
    args
}
