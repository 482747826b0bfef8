//! # Duck (Strategy)
//!
//! A [`Duck`] does not know how it quacks. It holds one quack behaviour in a
//! [`StrategyContext`] and delegates to it, so the sound can be swapped at runtime.
//!
//! ```rust
//! use pattern_sample::duck::{Duck, LouderQuack};
//!
//! let mut duck = Duck::new();
//! assert_eq!(duck.quack().unwrap(), "Quack");
//!
//! duck.set_quack(Box::new(LouderQuack));
//! assert_eq!(duck.quack().unwrap(), "QUACK!!!");
//! ```

use pattern_framework::{PatternError, Strategy, StrategyContext};
use tracing::instrument;

/// Any behaviour a duck can quack with.
pub type QuackBehaviour = dyn Strategy<Output = String>;

/// The default behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quack;

impl Strategy for Quack {
    type Output = String;

    fn name(&self) -> &'static str {
        "quack"
    }

    fn execute(&self) -> String {
        "Quack".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LouderQuack;

impl Strategy for LouderQuack {
    type Output = String;

    fn name(&self) -> &'static str {
        "louder_quack"
    }

    fn execute(&self) -> String {
        "QUACK!!!".to_string()
    }
}

/// The strategy context.
#[derive(Debug)]
pub struct Duck {
    quacker: StrategyContext<String>,
}

impl Duck {
    /// A duck that starts with the plain [`Quack`].
    pub fn new() -> Self {
        Self {
            quacker: StrategyContext::new("duck", Box::new(Quack)),
        }
    }

    /// Swaps the quack behaviour.
    pub fn set_quack(&mut self, behaviour: Box<QuackBehaviour>) {
        self.quacker.set_strategy(behaviour);
    }

    /// Name of the current behaviour.
    pub fn behaviour(&self) -> Option<&'static str> {
        self.quacker.active_name()
    }

    #[instrument(skip(self))]
    pub fn quack(&self) -> Result<String, PatternError> {
        self.quacker.invoke()
    }
}

impl Default for Duck {
    fn default() -> Self {
        Self::new()
    }
}
