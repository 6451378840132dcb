//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default filter directives used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,sortable_ui=debug";

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`]. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a global fmt subscriber with explicit filter directives.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("Global subscriber already installed");
    }
}
