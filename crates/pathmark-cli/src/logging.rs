//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout carries only command output.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber.
///
/// `verbose` forces `debug`. Otherwise `RUST_LOG` applies, defaulting to
/// `warn`. A subscriber that is already installed is left in place.
pub fn init(verbose: bool) {
    let filter_layer = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let installed = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}
