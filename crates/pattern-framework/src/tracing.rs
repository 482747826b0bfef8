//! # Observability & Tracing
//!
//! Structured logging for the pattern framework and any application built on it.
//!
//! Every module logs through the `tracing` macros with structured fields:
//!
//! - **Strategy**: `Strategy set` / `Invoke` with `context` and `strategy` fields
//! - **Builder**: one `Step` event per construction step, with the `step` name
//! - **Factory**: `Create from raw`, plus a `warn` when an unknown discriminant falls back
//! - **Observer**: `Registered`, `Unregistered` and `Notified` with counts
//! - **Singleton**: `Initializing` / `Initialized`
//!
//! ## Usage
//!
//! ```bash
//! # Default: info and above
//! cargo run -p pattern-sample
//!
//! # Every step of every pattern
//! RUST_LOG=debug cargo run -p pattern-sample
//!
//! # Only the framework internals
//! RUST_LOG=pattern_framework=debug cargo run -p pattern-sample
//! ```

use tracing_subscriber::EnvFilter;

/// Log directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Initializes the global subscriber.
///
/// Filtering comes from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`]. The format is
/// compact and hides module paths.
pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
