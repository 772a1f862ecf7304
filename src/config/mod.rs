//! Configuration and constants
//!
//! - [`defaults`] - Default values and fixed constants
//! - [`builtin`] - The compiled-in package catalog

pub mod builtin;
pub mod defaults;
