//! Plain data produced by the demos: the [`Pizza`] a builder assembles and the
//! [`Shape`]s a factory hands out.

pub mod pizza;
pub mod shape;

pub use pizza::*;
pub use shape::*;
