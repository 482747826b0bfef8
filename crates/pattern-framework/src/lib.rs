//! # Pattern Framework
//!
//! Reusable building blocks for the classic object-oriented design patterns, expressed
//! with traits, ownership and `Result` instead of base classes, raw pointers and
//! "undefined if misused".
//!
//! ## Module Tour
//!
//! | Pattern    | Module          | Key items                                                |
//! |------------|-----------------|----------------------------------------------------------|
//! | Singleton  | [`singleton`]   | [`Singleton`]                                            |
//! | Strategy   | [`strategy`]    | [`Strategy`], [`StrategyContext`]                        |
//! | Decorator  | [`decorator`]   | [`Component`], [`Decoration`], [`Decorator`], [`Decorate`] |
//! | Builder    | [`builder`]     | [`Workbench`], [`BuildState`]                            |
//! | Factory    | [`factory`]     | [`Discriminant`], [`Factory`]                            |
//! | Observer   | [`observer`]    | [`Observer`], [`ObserverRegistry`], [`Observee`]         |
//!
//! ## Design Principles
//!
//! - Encapsulate what varies.
//! - Favour composition over inheritance.
//! - Program to interfaces, not concrete types.
//! - Open for extension, closed for modification.
//!
//! ## Error Handling
//!
//! Misuse that the textbook versions leave undefined (a missing strategy, a builder step
//! before the product exists, a singleton initializing itself) surfaces as a
//! [`PatternError`].
//!
//! ## Threading
//!
//! Everything except [`Singleton`] is single-threaded by design: observers are held as
//! `Weak` handles behind a `RefCell`, and no type here spawns work.

pub mod builder;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod strategy;
pub mod tracing;

// Re-export core types for convenience
pub use builder::{BuildState, Workbench};
pub use decorator::{Component, Decorate, Decoration, Decorator};
pub use error::PatternError;
pub use factory::{Discriminant, Factory};
pub use observer::{Observee, Observer, ObserverRegistry};
pub use singleton::Singleton;
pub use strategy::{Strategy, StrategyContext};
