//! # Pattern Recipe Sample
//!
//! Toy domains built on [`pattern_framework`], one per classic pattern.
//!
//! ## Core Components
//!
//! - **[duck]**: Strategy. A [`Duck`](duck::Duck) with a swappable quack.
//! - **[bar]**: Decorator. A [`RumAndCoke`](bar::RumAndCoke) garnished with
//!   [`Umbrella`](bar::Umbrella) and [`Lime`](bar::Lime).
//! - **[kitchen]**: Builder. A [`Cook`](kitchen::Cook) directing pizza builders.
//! - **[shapes]**: Factory. A [`ShapeFactory`](shapes::ShapeFactory) making circles and squares.
//! - **[database]**: Observer. A [`Database`](database::Database) notifying
//!   [`Listener`](database::Listener)s.
//! - **[lifecycle]**: Configuration (the Singleton demo) and the
//!   [`Showcase`](lifecycle::Showcase) driver.
//! - **[model]**: Plain data ([`Pizza`](model::Pizza), [`Shape`](model::Shape)).
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run -p pattern-sample
//! PATTERN_DEMOS=builder,factory RUST_LOG=debug cargo run -p pattern-sample
//! ```

pub mod bar;
pub mod database;
pub mod duck;
pub mod kitchen;
pub mod lifecycle;
pub mod model;
pub mod shapes;
