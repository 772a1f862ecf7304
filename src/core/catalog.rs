//! Package catalog parsing and validation
//!
//! The catalog lists every package with its versions, plus the architectures
//! and distributions the matrix is built for. The compiled-in catalog is
//! returned by [`Catalog::builtin`]; a TOML catalog file replaces it as a
//! whole.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::builtin;
use crate::config::defaults::{DEFAULT_BUILD_ARGS, DEFAULT_BUILD_PROGRAM};
use crate::error::CatalogError;

/// One buildable version of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpec {
    /// Upstream version string
    pub version: String,

    /// Package revision
    pub revision: String,

    /// Mark the artifact as a stable release
    #[serde(default)]
    pub stable: bool,
}

impl VersionSpec {
    /// Create a version spec
    pub fn new(version: impl Into<String>, revision: impl Into<String>, stable: bool) -> Self {
        Self {
            version: version.into(),
            revision: revision.into(),
            stable,
        }
    }
}

/// A package and the versions to build for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    /// Package name
    pub name: String,

    /// Versions in build order
    pub versions: Vec<VersionSpec>,
}

impl PackageEntry {
    pub fn new(name: impl Into<String>, versions: Vec<VersionSpec>) -> Self {
        Self {
            name: name.into(),
            versions,
        }
    }
}

/// External build tool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Program to run
    pub program: String,

    /// Arguments placed before the per-task flags
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory for the build tool
    #[serde(default)]
    pub workdir: Option<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_BUILD_PROGRAM.to_string(),
            args: DEFAULT_BUILD_ARGS.iter().map(ToString::to_string).collect(),
            workdir: None,
        }
    }
}

/// The full build matrix definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Target CPU architectures
    #[serde(default = "builtin::architectures")]
    pub architectures: Vec<String>,

    /// Target distributions
    #[serde(default = "builtin::distros")]
    pub distros: Vec<String>,

    /// Build tool settings
    #[serde(default)]
    pub tool: ToolConfig,

    /// Packages in declaration order
    #[serde(default, rename = "package")]
    pub packages: Vec<PackageEntry>,
}

impl Catalog {
    /// The compiled-in catalog
    pub fn builtin() -> Self {
        Self {
            architectures: builtin::architectures(),
            distros: builtin::distros(),
            tool: ToolConfig::default(),
            packages: builtin::packages(),
        }
    }

    /// Parse a catalog from TOML content
    ///
    /// The result is validated, see [`Catalog::validate`].
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(content).map_err(|e| CatalogError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Replace the architecture list
    #[must_use]
    pub fn with_architectures(mut self, architectures: Vec<String>) -> Self {
        self.architectures = architectures;
        self
    }

    /// Replace the distribution list
    #[must_use]
    pub fn with_distros(mut self, distros: Vec<String>) -> Self {
        self.distros = distros;
        self
    }

    /// Run the build tool from another directory
    #[must_use]
    pub fn with_workdir(mut self, workdir: PathBuf) -> Self {
        self.tool.workdir = Some(workdir);
        self
    }

    /// Check that every list taking part in the cross product is non-empty
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.packages.is_empty() {
            return Err(CatalogError::NoPackages);
        }
        if let Some(pkg) = self.packages.iter().find(|p| p.versions.is_empty()) {
            return Err(CatalogError::NoVersions {
                package: pkg.name.clone(),
            });
        }
        if self.architectures.is_empty() {
            return Err(CatalogError::NoArchitectures);
        }
        if self.distros.is_empty() {
            return Err(CatalogError::NoDistros);
        }
        Ok(())
    }

    /// Number of tasks this catalog expands to
    pub fn task_count(&self) -> usize {
        let versions: usize = self.packages.iter().map(|p| p.versions.len()).sum();
        versions * self.architectures.len() * self.distros.len()
    }
}
