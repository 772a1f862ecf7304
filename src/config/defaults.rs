//! Default configuration values

/// Build tool program invoked once per task
pub const DEFAULT_BUILD_PROGRAM: &str = "go";

/// Leading arguments passed to the build tool before the task flags
pub const DEFAULT_BUILD_ARGS: &[&str] = &["run", "build.go"];

/// Exit code used when the build tool cannot be launched, or for any
/// failure that carries no exit status of its own
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 1;

/// Log level used when neither `RUST_LOG` nor a verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Environment variable naming a catalog file
pub const CATALOG_ENV: &str = "DEBMATRIX_CATALOG";

/// Build tool flag names
pub mod flags {
    pub const ARCH: &str = "-arch";
    pub const DISTRO: &str = "-distro_name";
    pub const PACKAGE: &str = "-package";
    pub const VERSION: &str = "-version";
    pub const REVISION: &str = "-revision";
    pub const STABLE: &str = "-stable";
}
