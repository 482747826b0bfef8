//! # Bar (Decorator)
//!
//! A [`RumAndCoke`] is the concrete drink; [`Lime`] and [`Umbrella`] are garnishes that
//! wrap any [`Beverage`] and add to its description. Garnishes apply innermost first.
//!
//! ```rust
//! use pattern_sample::bar::{Beverage, Lime, RumAndCoke, Umbrella};
//! use pattern_framework::Decorate;
//!
//! let drink = RumAndCoke.decorate::<Umbrella>().decorate::<Lime>();
//! assert_eq!(drink.describe(), "I am a rum and coke, with an umbrella!, with a lime!");
//! ```

use pattern_framework::{Decorate, Decoration, Decorator};

/// Anything served at the bar, garnished or not.
pub use pattern_framework::Component as Beverage;

/// The concrete drink every garnish chain ends in.
#[derive(Debug, Clone, Copy, Default)]
pub struct RumAndCoke;

impl Beverage for RumAndCoke {
    fn describe(&self) -> String {
        "I am a rum and coke".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Lime;

impl Decoration for Lime {
    const SUFFIX: &'static str = ", with a lime!";
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Umbrella;

impl Decoration for Umbrella {
    const SUFFIX: &'static str = ", with an umbrella!";
}

pub type WithLime = Decorator<Lime>;
pub type WithUmbrella = Decorator<Umbrella>;

/// The house special: an umbrella first, then a lime.
pub fn house_special() -> WithLime {
    RumAndCoke.decorate::<Umbrella>().decorate::<Lime>()
}
