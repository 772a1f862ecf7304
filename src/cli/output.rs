//! Output formatting and logging setup
//!
//! Progress is reported as `tracing` events written to stderr, one
//! timestamped line per event. Command results go to stdout.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::config::defaults::DEFAULT_LOG_LEVEL;
use crate::error::find_run_error;

/// Output settings selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Errors only
    pub quiet: bool,
    /// Machine-readable command output
    pub json: bool,
    /// Verbosity level (-v count)
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Log level implied by the flags
    ///
    /// `--quiet` wins over `--verbose`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose > 0 {
            "trace"
        } else {
            DEFAULT_LOG_LEVEL
        }
    }

    /// Build the log filter, preferring `RUST_LOG` when it is set
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()))
    }

    /// Install the global tracing subscriber
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .init();
    }
}

/// Display an error that aborted the run
///
/// Task failures were already reported by the runner's error line and are
/// not repeated.
pub fn display_error(error: &anyhow::Error) {
    if find_run_error(error).is_some() {
        return;
    }

    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
