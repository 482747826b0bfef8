//! # Builder Workbench
//!
//! The state machine every step-wise builder sits on.
//!
//! A builder assembles its product in several independent steps. Running a step before
//! the product exists is a programming error, so the product lives in a [`Workbench`]
//! with two states:
//!
//! ```text
//!            start()              take()
//!  Unbaked ----------> Baked(P) ----------> Unbaked
//!                       |    ^
//!                       +----+ start() (discards the old product)
//! ```
//!
//! Steps borrow the product through [`Workbench::current_mut`], which fails with
//! [`PatternError::NotStarted`] while the workbench is unbaked.

use crate::error::PatternError;
use tracing::debug;

/// Where the product currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildState<P> {
    Unbaked,
    Baked(P),
}

impl<P> Default for BuildState<P> {
    fn default() -> Self {
        BuildState::Unbaked
    }
}

/// Holds at most one product under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbench<P> {
    state: BuildState<P>,
}

impl<P> Default for Workbench<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Workbench<P> {
    pub fn new() -> Self {
        Self {
            state: BuildState::Unbaked,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self.state, BuildState::Baked(_))
    }

    /// Places a fresh product on the workbench, replacing any previous one.
    pub fn start_with(&mut self, product: P) {
        if self.is_started() {
            debug!("Discarding previous product");
        }
        self.state = BuildState::Baked(product);
    }

    /// Mutable access for the construction step named `step`.
    pub fn current_mut(&mut self, step: &'static str) -> Result<&mut P, PatternError> {
        match &mut self.state {
            BuildState::Baked(product) => {
                debug!(step, "Step");
                Ok(product)
            }
            BuildState::Unbaked => Err(PatternError::NotStarted { step }),
        }
    }

    /// Read access to the finished (or in-progress) product.
    pub fn current(&self) -> Result<&P, PatternError> {
        match &self.state {
            BuildState::Baked(product) => Ok(product),
            BuildState::Unbaked => Err(PatternError::NotStarted { step: "get" }),
        }
    }

    /// Moves the product out, leaving the workbench unbaked.
    pub fn take(&mut self) -> Result<P, PatternError> {
        match std::mem::take(&mut self.state) {
            BuildState::Baked(product) => Ok(product),
            BuildState::Unbaked => Err(PatternError::NotStarted { step: "take" }),
        }
    }
}

impl<P: Default> Workbench<P> {
    /// Places an empty product on the workbench.
    pub fn start(&mut self) {
        self.start_with(P::default());
    }
}
