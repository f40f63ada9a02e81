//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "nativeui=debug,nativeui_core=info";

/// Install the fmt subscriber with [`DEFAULT_FILTER`].
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install the fmt subscriber with explicit filter directives.
///
/// `RUST_LOG` still takes precedence when present.
pub fn init_with_filter(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::trace!("Global subscriber already installed, skipping");
    }
}
