//! # Decorator
//!
//! Attach extra responsibilities to an object by wrapping it, instead of subclassing.
//!
//! ## Key Types
//!
//! - [`Component`]: anything that can describe itself. Leaves and decorators both implement it.
//! - [`Decoration`]: the fixed suffix a decorator contributes.
//! - [`Decorator`]: the generic wrapper that owns exactly one inner component.
//! - [`Decorate`]: extension trait for fluent, innermost-first wrapping.
//!
//! ## Ownership
//!
//! Each [`Decorator`] owns its inner component through a `Box`, so a chain is a straight
//! line of exclusive owners ending in a leaf. A decorator cannot wrap itself, directly or
//! transitively, because it would have to own itself. Dropping the outermost wrapper
//! releases every layer exactly once.
//!
//! ```rust
//! use pattern_framework::{Component, Decorate, Decoration};
//!
//! struct Tea;
//! impl Component for Tea {
//!     fn describe(&self) -> String { "tea".into() }
//! }
//!
//! struct Milk;
//! impl Decoration for Milk { const SUFFIX: &'static str = " with milk"; }
//!
//! struct Sugar;
//! impl Decoration for Sugar { const SUFFIX: &'static str = " and sugar"; }
//!
//! let cup = Tea.decorate::<Milk>().decorate::<Sugar>();
//! assert_eq!(cup.describe(), "tea with milk and sugar");
//! assert_eq!(cup.layers(), 3);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A description-producing entity.
pub trait Component {
    /// Full description of this node, including every layer beneath it.
    fn describe(&self) -> String;

    /// Number of nodes in the chain rooted here. Leaves count as one.
    fn layers(&self) -> usize {
        1
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn layers(&self) -> usize {
        (**self).layers()
    }
}

/// The fixed text a decorator appends to the description of whatever it wraps.
pub trait Decoration {
    const SUFFIX: &'static str;
}

/// A component wrapped by the decoration `D`.
pub struct Decorator<D: Decoration> {
    inner: Box<dyn Component>,
    _decoration: PhantomData<D>,
}

impl<D: Decoration> Decorator<D> {
    /// Takes ownership of `inner` and wraps it.
    pub fn wrap(inner: Box<dyn Component>) -> Self {
        Self {
            inner,
            _decoration: PhantomData,
        }
    }

    /// The wrapped component.
    pub fn inner(&self) -> &dyn Component {
        self.inner.as_ref()
    }

    /// Removes this layer and hands back the wrapped component.
    pub fn unwrap_inner(self) -> Box<dyn Component> {
        self.inner
    }
}

impl<D: Decoration> Component for Decorator<D> {
    fn describe(&self) -> String {
        let mut description = self.inner.describe();
        description.push_str(D::SUFFIX);
        description
    }

    fn layers(&self) -> usize {
        self.inner.layers() + 1
    }
}

impl<D: Decoration> fmt::Debug for Decorator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorator")
            .field("suffix", &D::SUFFIX)
            .field("layers", &self.layers())
            .finish()
    }
}

/// Fluent wrapping for any owned component.
pub trait Decorate: Component + Sized + 'static {
    /// Wraps `self` in the decoration `D`.
    fn decorate<D: Decoration>(self) -> Decorator<D> {
        Decorator::wrap(Box::new(self))
    }
}

impl<C: Component + 'static> Decorate for C {}
