//! Shared default values for the command line.

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "GENCOMP_LOG";

/// Log level used when `--verbose` is not given.
pub const LOG_LEVEL: &str = "warn";

/// Log level used with `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
