use pattern_framework::Discriminant;
use std::fmt::Debug;
use tracing::info;

/// Which shape the [`ShapeFactory`](crate::shapes::ShapeFactory) should make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ShapeKind {
    Circle = 0,
    Square = 1,
}

impl Discriminant for ShapeKind {
    const VARIANTS: &'static [Self] = &[ShapeKind::Circle, ShapeKind::Square];

    fn raw(self) -> i32 {
        self as i32
    }
}

impl ShapeKind {
    /// The identity label carried by shapes of this kind.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
        }
    }
}

/// A drawable product of the shape factory.
pub trait Shape: Debug {
    /// Identity label, e.g. `"Circle"`.
    fn name(&self) -> &str;

    fn draw(&self) -> String {
        format!("drawing {}", self.name())
    }
}

#[derive(Debug)]
pub struct Circle {
    name: String,
}

impl Circle {
    pub fn new() -> Self {
        Self {
            name: ShapeKind::Circle.label().to_string(),
        }
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Circle {
    fn drop(&mut self) {
        info!(shape = %self.name, "{} destructor called", self.name);
    }
}

#[derive(Debug)]
pub struct Square {
    name: String,
}

impl Square {
    pub fn new() -> Self {
        Self {
            name: ShapeKind::Square.label().to_string(),
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Square {
    fn drop(&mut self) {
        info!(shape = %self.name, "{} destructor called", self.name);
    }
}
