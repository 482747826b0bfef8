//! # Factory
//!
//! Create objects through one method keyed on a discriminator, without the caller naming
//! a concrete type.
//!
//! ## Total vs. strict discriminants
//!
//! Discriminators often arrive as raw integers (a config value, a wire byte). A
//! [`Discriminant`] offers two conversions:
//!
//! - [`Discriminant::from_raw`] is total: unknown values fall back to the first declared
//!   variant and a warning is logged.
//! - [`Discriminant::try_from_raw`] is strict and reports
//!   [`PatternError::UnknownDiscriminant`].
//!
//! [`Factory::create_raw`] goes through the total conversion, so a factory never refuses
//! to produce something.

use crate::error::PatternError;
use std::fmt::Debug;
use tracing::{debug, warn};

/// A closed set of product kinds.
pub trait Discriminant: Copy + Debug + 'static {
    /// Every declared variant, in declaration order. Must not be empty; the first entry is
    /// the fallback for unknown raw values.
    const VARIANTS: &'static [Self];

    /// The raw integer for this variant.
    fn raw(self) -> i32;

    /// Strict conversion from a raw integer.
    fn try_from_raw(raw: i32) -> Result<Self, PatternError> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.raw() == raw)
            .ok_or(PatternError::UnknownDiscriminant(raw))
    }

    /// Total conversion from a raw integer, falling back to the first variant.
    fn from_raw(raw: i32) -> Self {
        match Self::try_from_raw(raw) {
            Ok(variant) => variant,
            Err(_) => {
                let fallback = Self::fallback();
                warn!(raw, ?fallback, "Unknown discriminant, using fallback");
                fallback
            }
        }
    }

    /// The variant used for unknown raw values.
    fn fallback() -> Self {
        Self::VARIANTS[0]
    }
}

/// Creates products of type `Product` from a [`Discriminant`].
pub trait Factory {
    type Kind: Discriminant;
    type Product: ?Sized;

    /// Creates a fresh product for `kind`.
    fn create(&self, kind: Self::Kind) -> Box<Self::Product>;

    /// Creates a fresh product from a raw discriminator value.
    fn create_raw(&self, raw: i32) -> Box<Self::Product> {
        let kind = Self::Kind::from_raw(raw);
        debug!(raw, ?kind, "Create from raw");
        self.create(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Coin {
        Heads,
        Tails,
    }

    impl Discriminant for Coin {
        const VARIANTS: &'static [Self] = &[Coin::Heads, Coin::Tails];

        fn raw(self) -> i32 {
            self as i32
        }
    }

    struct Mint;

    impl Factory for Mint {
        type Kind = Coin;
        type Product = str;

        fn create(&self, kind: Coin) -> Box<str> {
            match kind {
                Coin::Heads => "heads".into(),
                Coin::Tails => "tails".into(),
            }
        }
    }

    #[test]
    fn test_strict_conversion() {
        assert_eq!(Coin::try_from_raw(1), Ok(Coin::Tails));
        assert_eq!(
            Coin::try_from_raw(9),
            Err(PatternError::UnknownDiscriminant(9))
        );
    }

    #[test]
    fn test_total_conversion_falls_back_to_first_variant() {
        assert_eq!(Coin::from_raw(0), Coin::Heads);
        assert_eq!(Coin::from_raw(1), Coin::Tails);
        assert_eq!(Coin::from_raw(-3), Coin::Heads);
        assert_eq!(Coin::from_raw(i32::MAX), Coin::Heads);
    }

    #[test]
    fn test_create_raw_uses_fallback() {
        assert_eq!(&*Mint.create_raw(1), "tails");
        assert_eq!(&*Mint.create_raw(42), "heads");
    }
}
