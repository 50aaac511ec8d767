pub mod config;
pub mod detailed;
pub mod error;
pub mod format;
pub mod pricing;
pub mod projection;
pub mod simplified;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Note: This function can only be called once per process. The binary calls
/// it before dispatching so config-load warnings are visible.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
