//! Backoffice Testkit
//!
//! Deterministic substitutes for the dashboard's collaborators plus shared
//! fixtures. Dev-only; never linked into production builds.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

pub mod fixtures;
pub mod mock_effects;

pub use mock_effects::{Call, MockEffects};

/// Install a test-writer tracing subscriber once per process.
///
/// Honours `RUST_LOG`; defaults to `debug` for the dashboard crates.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("backoffice_dashboard=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
