//! Infrastructure layer
//!
//! Handles external processes. This module is the only place a subprocess is
//! spawned.

pub mod process;
