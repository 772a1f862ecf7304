//! Core business logic module
//!
//! Everything here is free of process I/O; build tool invocations go through
//! the [`crate::infra::process::ProcessRunner`] seam.
//!
//! # Submodules
//!
//! - [`catalog`] - Catalog definition, loading and validation
//! - [`plan`] - Build plan expansion
//! - [`invocation`] - Build tool command lines
//! - [`runner`] - Sequential fail-fast execution

pub mod catalog;
pub mod invocation;
pub mod plan;
pub mod runner;
