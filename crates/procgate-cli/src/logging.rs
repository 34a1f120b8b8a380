//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset.
pub const fn default_directive(verbose: bool, debug: bool) -> &'static str {
    if verbose || debug { "debug" } else { "info" }
}

/// Install the global subscriber. `RUST_LOG` overrides the flags.
pub fn init(verbose: bool, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, debug)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
