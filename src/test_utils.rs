//! Test utilities
//!
//! Proptest generators, a scripted [`ProcessRunner`] and a log capturing
//! subscriber.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::core::invocation::Invocation;
use crate::error::LaunchError;
use crate::infra::process::ProcessRunner;

pub mod generators {
    use proptest::prelude::*;

    use crate::core::catalog::{PackageEntry, VersionSpec};

    /// Generate a valid package name (lowercase alphanumeric with hyphens)
    pub fn package_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,20}[a-z0-9]"
    }

    /// Generate a deb-style upstream version string
    pub fn version() -> impl Strategy<Value = String> {
        (0u32..20, 0u32..20, 0u32..20, prop::option::of("(alpha|beta|rc)\\.[0-9]"))
            .prop_map(|(major, minor, patch, pre)| match pre {
                Some(pre) => format!("{major}.{minor}.{patch}-{pre}"),
                None => format!("{major}.{minor}.{patch}"),
            })
    }

    /// Generate a two-digit package revision
    pub fn revision() -> impl Strategy<Value = String> {
        "[0-9]{2}"
    }

    /// Generate packages with unique names, each with unique versions
    pub fn catalog_packages() -> impl Strategy<Value = Vec<PackageEntry>> {
        prop::collection::btree_set(package_name(), 1..4).prop_flat_map(|names| {
            names
                .into_iter()
                .map(|name| {
                    prop::collection::btree_map(version(), (revision(), any::<bool>()), 1..4)
                        .prop_map(move |versions| {
                            let specs = versions
                                .into_iter()
                                .map(|(v, (r, stable))| VersionSpec::new(v, r, stable))
                                .collect();
                            PackageEntry::new(name.clone(), specs)
                        })
                })
                .collect::<Vec<_>>()
        })
    }

    /// Generate a non-empty list of unique architecture or distro identifiers
    pub fn axis() -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set("[a-z][a-z0-9]{1,8}", 1..4)
            .prop_map(|set| set.into_iter().collect())
    }
}

/// Process runner returning predetermined exit codes
///
/// Every invocation is recorded. Once the script is exhausted the fallback
/// code is returned; without a fallback, running out of script panics.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    script: RefCell<VecDeque<Result<i32, LaunchError>>>,
    fallback: Option<i32>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    /// Return the scripted results in order
    pub fn new(script: Vec<Result<i32, LaunchError>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            ..Self::default()
        }
    }

    /// Return the same exit code for every invocation
    pub fn always(code: i32) -> Self {
        Self {
            fallback: Some(code),
            ..Self::default()
        }
    }

    /// Invocations seen so far
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32, LaunchError> {
        self.calls.borrow_mut().push(invocation.clone());
        match self.script.borrow_mut().pop_front() {
            Some(result) => result,
            None => Ok(self.fallback.expect("script exhausted")),
        }
    }
}

/// In-memory log sink
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with every tracing event captured as plain text
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_package_name_generator(name in package_name()) {
            prop_assert!(name.len() >= 2);
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_catalog_packages_are_non_empty(packages in catalog_packages()) {
            prop_assert!(!packages.is_empty());
            prop_assert!(packages.iter().all(|p| !p.versions.is_empty()));
        }
    }

    #[test]
    fn test_capture_logs() {
        let ((), logs) = capture_logs(|| tracing::error!("captured line"));
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("captured line"));
    }

    #[test]
    fn test_scripted_runner_falls_back() {
        let runner = ScriptedRunner {
            fallback: Some(4),
            ..ScriptedRunner::new(vec![Ok(0)])
        };
        let inv = Invocation {
            program: "go".to_string(),
            args: vec![],
            workdir: None,
        };
        assert_eq!(runner.run(&inv).unwrap(), 0);
        assert_eq!(runner.run(&inv).unwrap(), 4);
        assert_eq!(runner.calls().len(), 2);
    }
}
