//! Compiled-in build matrix
//!
//! Building the foreign architectures requires them to be registered first:
//! `dpkg --add-architecture armhf` and `dpkg --add-architecture arm64`.

use crate::core::catalog::{PackageEntry, VersionSpec};

/// Architectures built by default
pub fn architectures() -> Vec<String> {
    ["amd64", "arm", "arm64"].map(String::from).to_vec()
}

/// Distributions built by default
pub fn distros() -> Vec<String> {
    vec!["xenial".to_string()]
}

/// Packages built by default, in build order
pub fn packages() -> Vec<PackageEntry> {
    vec![
        PackageEntry::new(
            "kubectl",
            vec![
                VersionSpec::new("1.3.7", "00", false),
                VersionSpec::new("1.4.0-beta.5", "00", false),
            ],
        ),
        PackageEntry::new(
            "kubelet",
            vec![
                VersionSpec::new("1.3.7", "00", false),
                VersionSpec::new("1.4.0-beta.5", "00", false),
            ],
        ),
        PackageEntry::new("kubeadm", vec![VersionSpec::new("1.4.0-alpha", "00", false)]),
        PackageEntry::new(
            "kubernetes-cni",
            vec![VersionSpec::new("0.3.0.1-07a8a2", "00", false)],
        ),
    ]
}
