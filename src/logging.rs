use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a `tracing` filter directive, e.g. `JCRS_LOG=jcrs=trace`
pub const LOG_ENV: &str = "JCRS_LOG";

/// Initialize diagnostics on stderr; stdout is reserved for the JSON document.
///
/// `JCRS_LOG` wins over `verbose`. Without either only warnings are shown.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep the existing one
    let _ = fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).try_init();
}
