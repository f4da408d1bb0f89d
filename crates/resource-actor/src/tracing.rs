//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole process. The actor loop
//! logs lifecycle events (startup, shutdown) and every operation with `entity_type`, `id`
//! and `size` fields; validation chains log the failing check at `debug`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads and failing checks
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `default_filter` (e.g. `"info"`) is used.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
