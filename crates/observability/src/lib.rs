//! Shared tracing/logging setup for storefront processes and test suites.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with the `RUST_LOG` filter (default `info`).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
}

/// Initialize tracing with explicit filter directives, e.g.
/// `"storefront_browse=debug"`. Used by test suites that want stable
/// output regardless of the environment.
pub fn init_with_directives(directives: &str) {
    init_with_filter(EnvFilter::new(directives));
}

fn init_with_filter(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
