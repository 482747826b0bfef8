//! # Kitchen (Builder)
//!
//! Separates *how* a pizza is assembled from *what* goes on it.
//!
//! ## Structure
//!
//! - [`PizzaBuilder`] - the construction steps, with a provided bake/get protocol
//! - [`builders`] - [`MeatFeastBuilder`] and [`SpicyPizzaBuilder`], each with fixed choices
//! - [`Cook`] - the director that runs the steps in a fixed order
//!
//! ## Protocol
//!
//! ```text
//! bake_pizza ─▶ choose_base ─▶ choose_sauce ─▶ choose_topping ─▶ get_pizza
//! ```
//!
//! Every builder keeps its pizza on a [`Workbench`], so a choose-step before
//! `bake_pizza` fails with [`PatternError::NotStarted`] rather than touching a pizza that
//! does not exist. Swapping the builder changes the pizza; the cook stays the same.
//!
//! ```rust
//! use pattern_sample::kitchen::{Cook, MeatFeastBuilder};
//!
//! let mut cook = Cook::new();
//! cook.set_pizza_builder(Box::new(MeatFeastBuilder::new()));
//! cook.bake_pizza().unwrap();
//! assert_eq!(
//!     cook.get_pizza().unwrap().describe(),
//!     "Pizza with deep pan base, bbq sauce, all the meat topping"
//! );
//! ```

pub mod builders;
pub mod cook;

pub use builders::*;
pub use cook::*;

use crate::model::Pizza;
use pattern_framework::{PatternError, Workbench};

/// Assembles a [`Pizza`] in three independent steps.
///
/// Implementors provide the workbench accessors and the three choices; the bake/get
/// protocol comes from the provided methods.
pub trait PizzaBuilder {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    fn workbench(&self) -> &Workbench<Pizza>;

    fn workbench_mut(&mut self) -> &mut Workbench<Pizza>;

    fn choose_base(&mut self) -> Result<(), PatternError>;

    fn choose_sauce(&mut self) -> Result<(), PatternError>;

    fn choose_topping(&mut self) -> Result<(), PatternError>;

    /// Starts a fresh, empty pizza, discarding any previous one.
    fn bake_pizza(&mut self) {
        self.workbench_mut().start();
    }

    /// The pizza being (or already) built.
    fn get_pizza(&self) -> Result<&Pizza, PatternError> {
        self.workbench().current()
    }

    /// Hands the pizza over, leaving the builder ready for the next bake.
    fn take_pizza(&mut self) -> Result<Pizza, PatternError> {
        self.workbench_mut().take()
    }
}
