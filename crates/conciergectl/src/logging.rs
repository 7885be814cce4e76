//! Tracing setup for conciergectl.
//!
//! Logs go to stderr so replies on stdout stay clean. The filter comes from
//! `$CONCIERGE_LOG` (tracing-subscriber env-filter syntax); without it the
//! level is `warn`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Env var holding the log filter
pub const LOG_ENV: &str = "CONCIERGE_LOG";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "concierge_shared=debug,conciergectl=debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
