//! Root sink: `tracing` subscriber setup and forwarding of propagated records.

/// Initialize the process-wide `tracing` subscriber (human-readable lines).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize the process-wide `tracing` subscriber with JSON lines.
///
/// Safe to call multiple times.
pub fn init_json() {
    tracing::init_json();
}

/// Subscriber configuration (filters, layers) and the root forwarder.
pub mod tracing;

pub use crate::tracing::forward_to_root;
