//! Logging setup shared by the binary, tests and benchmarks

use std::sync::Once;
use tracing::debug;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a global `tracing` subscriber that writes to stderr.
///
/// The filter is read from the `LOGLEVEL` environment variable (for example
/// `DEBUG` or `target_pricer=trace`) and defaults to `INFO`. Stdout is left
/// untouched because it carries the pricer output.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LOGLEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        if installed.is_ok() {
            debug!("Logger initialized");
        }
    });
}
