//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod plan;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::defaults::CATALOG_ENV;
use crate::core::catalog::Catalog;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every task of the matrix (the default)
    Build,

    /// Print the build plan without running anything
    Plan,
}

/// Options selecting what the matrix contains
#[derive(Args, Debug, Default)]
pub struct MatrixArgs {
    /// Catalog file to use instead of the compiled-in catalog
    #[arg(short, long, global = true, env = CATALOG_ENV, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Architectures to build for (comma-separated)
    #[arg(short, long, global = true, value_delimiter = ',', value_name = "LIST")]
    pub arch: Option<Vec<String>>,

    /// Distributions to build for (comma-separated)
    #[arg(short, long, global = true, value_delimiter = ',', value_name = "LIST")]
    pub distro: Option<Vec<String>>,

    /// Directory to run the build tool in
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub workdir: Option<PathBuf>,
}

impl MatrixArgs {
    /// Resolve the catalog and apply command-line overrides
    pub fn load_catalog(&self) -> Result<Catalog> {
        let mut catalog = match &self.catalog {
            Some(path) => {
                tracing::debug!("Loading catalog from {}", path.display());
                Catalog::load(path).with_context(|| "Failed to load catalog")?
            }
            None => Catalog::builtin(),
        };

        if let Some(arch) = &self.arch {
            catalog = catalog.with_architectures(arch.clone());
        }
        if let Some(distro) = &self.distro {
            catalog = catalog.with_distros(distro.clone());
        }
        if let Some(workdir) = &self.workdir {
            catalog = catalog.with_workdir(workdir.clone());
        }

        catalog
            .validate()
            .with_context(|| "Invalid build matrix")?;
        Ok(catalog)
    }
}
