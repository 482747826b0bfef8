//! # Observer Registry
//!
//! One-to-many notification: a subject broadcasts to every registered observer.
//!
//! ## Non-owning references
//!
//! The registry stores [`Weak`] handles. It never keeps an observer alive and never
//! decides when one is dropped; the code that created the observer owns it. An observer
//! that has been dropped is skipped and forgotten on the next [`ObserverRegistry::notify`].
//!
//! ## Ordering and duplicates
//!
//! - Observers are notified in registration order.
//! - Registering the same observer twice means it is notified twice.
//! - Unregistering removes every occurrence, matched by identity.
//!
//! ## Re-entrancy
//!
//! `notify` walks a snapshot of the registry, so an observer may register or unregister
//! (itself or others) from inside [`Observer::update`]. Such changes apply from the next
//! notification onwards.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Receives notifications from a subject.
pub trait Observer {
    fn update(&self);
}

/// Ordered, non-owning list of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RefCell<Vec<Weak<dyn Observer>>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer`. Duplicates are kept.
    pub fn register(&self, observer: &Rc<dyn Observer>) {
        let mut observers = self.observers.borrow_mut();
        observers.push(Rc::downgrade(observer));
        debug!(observers = observers.len(), "Registered");
    }

    /// Removes every occurrence of `observer`. Unknown observers are ignored.
    pub fn unregister(&self, observer: &Rc<dyn Observer>) {
        let target = Rc::downgrade(observer);
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|o| !o.ptr_eq(&target));
        debug!(removed = before - observers.len(), "Unregistered");
    }

    /// Number of registrations whose observer is still alive.
    pub fn len(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|o| o.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls [`Observer::update`] on each live registration, in order.
    ///
    /// Returns the number of updates delivered.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<Weak<dyn Observer>> = {
            let mut observers = self.observers.borrow_mut();
            observers.retain(|o| o.strong_count() > 0);
            observers.clone()
        };

        let mut delivered = 0;
        for observer in snapshot.iter().filter_map(|o| o.upgrade()) {
            observer.update();
            delivered += 1;
        }
        debug!(delivered, "Notified");
        delivered
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

/// A subject that exposes registration through its [`ObserverRegistry`].
///
/// Implementors only provide [`registry`](Observee::registry); registration and
/// broadcasting come for free.
pub trait Observee {
    fn registry(&self) -> &ObserverRegistry;

    fn register_listener(&self, observer: &Rc<dyn Observer>) {
        self.registry().register(observer);
    }

    fn unregister_listener(&self, observer: &Rc<dyn Observer>) {
        self.registry().unregister(observer);
    }

    fn notify(&self) -> usize {
        self.registry().notify()
    }
}
