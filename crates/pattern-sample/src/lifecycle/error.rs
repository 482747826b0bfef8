//! Error types for the showcase application.

use pattern_framework::PatternError;
use thiserror::Error;

/// Errors that can occur while configuring or running the demos.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DemoError {
    /// A demo name did not match any known demo.
    #[error("Unknown demo: {0}")]
    UnknownDemo(String),

    /// A pattern was used outside its contract.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
