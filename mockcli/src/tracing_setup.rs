//! Console tracing setup for test binaries driving the harness.
//!
//! Usage:
//!   RUST_LOG=mockcli=debug cargo test   # see per-invocation debug lines

use tracing_subscriber::EnvFilter;

/// Initialize console tracing. Safe to call from every test; the first
/// call wins and later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
