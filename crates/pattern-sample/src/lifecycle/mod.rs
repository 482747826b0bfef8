//! # Showcase Lifecycle
//!
//! Configuration and sequencing for the demo binary.
//!
//! - [`config`] - [`Demo`] and [`DemoConfig`], read once per process from `PATTERN_DEMOS`
//! - [`showcase`] - [`Showcase`], which runs the selected demos in canonical order
//! - [`error`] - [`DemoError`]
//!
//! Logging is set up by [`pattern_framework::tracing::setup_tracing`]; see that module for
//! the `RUST_LOG` conventions.

pub mod config;
pub mod error;
pub mod showcase;

pub use config::*;
pub use error::*;
pub use showcase::*;
