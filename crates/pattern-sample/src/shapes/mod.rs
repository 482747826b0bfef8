//! # Shapes (Factory)
//!
//! [`ShapeFactory`] turns a [`ShapeKind`] into a freshly allocated [`Shape`]. Callers own
//! what they get back; dropping a shape logs its teardown.
//!
//! Raw discriminators that do not name a declared kind produce a [`Circle`], the first
//! declared kind, instead of an error:
//!
//! ```rust
//! use pattern_sample::shapes::ShapeFactory;
//!
//! let factory = ShapeFactory;
//! assert_eq!(factory.get_shape_raw(1).name(), "Square");
//! assert_eq!(factory.get_shape_raw(99).name(), "Circle");
//! ```

use crate::model::{Circle, Shape, ShapeKind, Square};
use pattern_framework::Factory;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn get_shape(&self, kind: ShapeKind) -> Box<dyn Shape> {
        self.create(kind)
    }

    /// Like [`get_shape`](Self::get_shape), for an integer that may not be a declared kind.
    pub fn get_shape_raw(&self, raw: i32) -> Box<dyn Shape> {
        self.create_raw(raw)
    }
}

impl Factory for ShapeFactory {
    type Kind = ShapeKind;
    type Product = dyn Shape;

    fn create(&self, kind: ShapeKind) -> Box<dyn Shape> {
        debug!(?kind, "Create shape");
        match kind {
            ShapeKind::Circle => Box::new(Circle::new()),
            ShapeKind::Square => Box::new(Square::new()),
        }
    }
}
