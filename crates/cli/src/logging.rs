use tracing_subscriber::EnvFilter;

use crate::defaults::{LOG_ENV, LOG_LEVEL, VERBOSE_LOG_LEVEL};

/// Install the global subscriber. Logs always go to stderr; stdout carries
/// the data stream.
///
/// The filter comes from `GENCOMP_LOG`, then `RUST_LOG`, then the level
/// chosen by `--verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { VERBOSE_LOG_LEVEL } else { LOG_LEVEL };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
