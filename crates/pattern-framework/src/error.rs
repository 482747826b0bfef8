//! # Framework Errors
//!
//! This module defines the common error type used throughout the pattern framework.
//! Every operation that the classic textbook versions leave as "undefined if misused"
//! (invoking a missing strategy, decorating a product that was never started, initializing
//! a singleton from inside its own initializer) reports one of these variants instead.

/// Errors that can occur within the pattern framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PatternError {
    /// A [`StrategyContext`](crate::StrategyContext) was invoked before any strategy was set.
    #[error("No strategy set on {context}")]
    StrategyUnset { context: &'static str },

    /// A construction step ran before the product was started.
    #[error("Step `{step}` called before the product was started")]
    NotStarted { step: &'static str },

    /// A director was asked to build without a builder.
    #[error("No builder assigned")]
    BuilderUnset,

    /// The initializer of a singleton tried to initialize the same singleton.
    #[error("Re-entrant initialization of singleton `{0}`")]
    ReentrantInit(&'static str),

    /// A raw value did not match any declared discriminant (strict conversions only).
    #[error("Unknown discriminant: {0}")]
    UnknownDiscriminant(i32),
}
