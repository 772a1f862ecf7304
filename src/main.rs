//! Debmatrix CLI - matrix build driver for deb packages
//!
//! Entry point for the debmatrix command-line application.

use clap::Parser;

use debmatrix::cli::output::display_error;
use debmatrix::cli::Cli;
use debmatrix::error::exit_code_for;

fn main() {
    let cli = Cli::parse();

    cli.output_config().init_tracing();

    // Run the command and propagate the failing task's exit status
    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(exit_code_for(&e));
    }
}
