//! External process execution
//!
//! [`ProcessRunner`] is the seam between the task runner and the operating
//! system. [`SystemProcessRunner`] spawns real processes; tests use a
//! scripted implementation instead.

use std::process::{Command, ExitStatus};

use crate::config::defaults::LAUNCH_FAILURE_EXIT_CODE;
use crate::core::invocation::Invocation;
use crate::error::LaunchError;

/// Runs one command to completion and reports its exit code
pub trait ProcessRunner {
    /// Run the invocation, blocking until the process exits
    fn run(&self, invocation: &Invocation) -> Result<i32, LaunchError>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<i32, LaunchError> {
        (**self).run(invocation)
    }
}

/// Spawns the build tool as a child process
///
/// stdout and stderr are inherited so the build tool's own output is
/// interleaved with the progress log.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32, LaunchError> {
        let mut cmd = Command::new(resolve_program(invocation)?);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.workdir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|e| LaunchError::Spawn {
            program: invocation.program.clone(),
            source: e,
        })?;

        Ok(exit_code(status))
    }
}

/// Locate the program before spawning it
///
/// Relative paths containing a separator are resolved against the
/// invocation's working directory, the same way the child would see them.
fn resolve_program(invocation: &Invocation) -> Result<std::path::PathBuf, LaunchError> {
    let not_found = |e: which::Error| LaunchError::NotFound {
        program: invocation.program.clone(),
        error: e.to_string(),
    };

    match &invocation.workdir {
        Some(dir) if invocation.program.contains(std::path::MAIN_SEPARATOR) => {
            let cwd = std::env::current_dir().map_err(|e| LaunchError::Spawn {
                program: invocation.program.clone(),
                source: e,
            })?;
            which::which_in(&invocation.program, None::<&str>, cwd.join(dir)).map_err(not_found)
        }
        _ => which::which(&invocation.program).map_err(not_found),
    }
}

/// Map an exit status to a process exit code
///
/// Processes killed by a signal report `128 + signal` on Unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    LAUNCH_FAILURE_EXIT_CODE
}
