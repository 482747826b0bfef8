//! # Strategy
//!
//! A family of interchangeable algorithms behind one trait, selected at runtime.
//!
//! The [`StrategyContext`] owns exactly one active strategy at a time and delegates
//! every invocation to it. Swapping the strategy changes what the context does without
//! touching the context itself.

use crate::error::PatternError;
use std::fmt;
use tracing::debug;

/// A single swappable behaviour.
///
/// Strategies are stateless from the context's point of view: the context only ever
/// calls [`Strategy::execute`] and hands back whatever it produces.
pub trait Strategy {
    /// The value produced by one invocation.
    type Output;

    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Run the behaviour.
    fn execute(&self) -> Self::Output;
}

/// A context that holds one replaceable [`Strategy`].
///
/// # Example
///
/// ```rust
/// use pattern_framework::{Strategy, StrategyContext};
///
/// struct Shout;
/// impl Strategy for Shout {
///     type Output = String;
///     fn name(&self) -> &'static str { "shout" }
///     fn execute(&self) -> String { "HEY".into() }
/// }
///
/// let mut ctx = StrategyContext::<String>::empty("greeter");
/// assert!(ctx.invoke().is_err());
///
/// ctx.set_strategy(Box::new(Shout));
/// assert_eq!(ctx.invoke().unwrap(), "HEY");
/// ```
pub struct StrategyContext<O> {
    label: &'static str,
    active: Option<Box<dyn Strategy<Output = O>>>,
}

impl<O> StrategyContext<O> {
    /// Creates a context with an initial strategy.
    pub fn new(label: &'static str, strategy: Box<dyn Strategy<Output = O>>) -> Self {
        Self {
            label,
            active: Some(strategy),
        }
    }

    /// Creates a context with no strategy; [`invoke`](Self::invoke) fails until one is set.
    pub fn empty(label: &'static str) -> Self {
        Self {
            label,
            active: None,
        }
    }

    /// Replaces the active strategy and returns the previous one, if any.
    pub fn set_strategy(
        &mut self,
        strategy: Box<dyn Strategy<Output = O>>,
    ) -> Option<Box<dyn Strategy<Output = O>>> {
        debug!(context = self.label, strategy = strategy.name(), "Strategy set");
        self.active.replace(strategy)
    }

    /// Name of the active strategy.
    pub fn active_name(&self) -> Option<&'static str> {
        self.active.as_ref().map(|s| s.name())
    }

    /// Delegates to the active strategy.
    pub fn invoke(&self) -> Result<O, PatternError> {
        let strategy = self.active.as_ref().ok_or(PatternError::StrategyUnset {
            context: self.label,
        })?;
        debug!(context = self.label, strategy = strategy.name(), "Invoke");
        Ok(strategy.execute())
    }
}

impl<O> fmt::Debug for StrategyContext<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyContext")
            .field("label", &self.label)
            .field("active", &self.active_name())
            .finish()
    }
}
