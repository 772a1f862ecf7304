//! Build plan generation
//!
//! Expands the catalog into one [`BuildTask`] per package version,
//! architecture and distribution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::catalog::{Catalog, PackageEntry};

/// One invocation of the build tool
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildTask {
    /// Package name
    pub package: String,
    /// Target architecture
    pub arch: String,
    /// Target distribution
    pub distro: String,
    /// Upstream version
    pub version: String,
    /// Package revision
    pub revision: String,
    /// Mark as a stable release
    pub stable: bool,
}

impl fmt::Display for BuildTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(arch={},distro={},version={},revision={}",
            self.package, self.arch, self.distro, self.version, self.revision
        )?;
        if self.stable {
            write!(f, ",stable")?;
        }
        write!(f, ")")
    }
}

/// Expand packages against architectures and distributions
///
/// Tasks are ordered package, then version, then architecture, then
/// distribution. The result holds exactly
/// `sum(versions) * architectures.len() * distros.len()` tasks.
pub fn plan(
    packages: &[PackageEntry],
    architectures: &[String],
    distros: &[String],
) -> Vec<BuildTask> {
    let mut tasks = Vec::new();

    for pkg in packages {
        for spec in &pkg.versions {
            for arch in architectures {
                for distro in distros {
                    tasks.push(BuildTask {
                        package: pkg.name.clone(),
                        arch: arch.clone(),
                        distro: distro.clone(),
                        version: spec.version.clone(),
                        revision: spec.revision.clone(),
                        stable: spec.stable,
                    });
                }
            }
        }
    }

    tasks
}

/// Expand a whole catalog
pub fn plan_catalog(catalog: &Catalog) -> Vec<BuildTask> {
    plan(&catalog.packages, &catalog.architectures, &catalog.distros)
}
