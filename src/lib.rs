//! Debmatrix - matrix build driver for deb packages
//!
//! Expands a catalog of packages and versions against target architectures
//! and distributions, then runs an external build tool once per combination,
//! sequentially, stopping at the first failure.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Catalog, plan expansion and the fail-fast task runner
//! - [`infra`] - Infrastructure layer (external processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
