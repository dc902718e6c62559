//! Tracing initialization and the bridge from named loggers into `tracing`.
//!
//! Named loggers that propagate all the way up hand their records to the
//! root. The root is whatever `tracing` subscriber the process installed.

use ctxlog_core::Level;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Filter comes from `RUST_LOG`; if unset or invalid, defaults to INFO.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init();
}

/// JSON variant of [`init`].
pub fn init_json() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Emit a record that propagated past every named ancestor.
///
/// `tracing` needs a static level per callsite, hence the match.
pub fn forward_to_root(level: Level, logger: &str, message: &str) {
    match level {
        Level::Debug => ::tracing::debug!(logger, severity = %level, "{message}"),
        Level::Info => ::tracing::info!(logger, severity = %level, "{message}"),
        Level::Warning => ::tracing::warn!(logger, severity = %level, "{message}"),
        Level::Error | Level::Critical => {
            ::tracing::error!(logger, severity = %level, "{message}")
        }
    }
}
