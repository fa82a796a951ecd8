//! Diagnostic logging for the generator binaries.
//!
//! Generated text owns stdout, so the subscriber always writes to stderr.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// Calling this more than once is harmless; the first subscriber stays in
/// place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _unused = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
