//! # Database (Observer)
//!
//! A [`Database`] broadcasts to every registered [`Listener`] when it updates. It holds
//! listeners by non-owning reference, so the caller decides how long each one lives.
//!
//! ```rust
//! use pattern_sample::database::{Database, Listener};
//! use pattern_framework::{Observee, Observer};
//! use std::rc::Rc;
//!
//! let db = Database::new();
//! let listener = Rc::new(Listener::new());
//! let handle: Rc<dyn Observer> = listener.clone();
//!
//! db.register_listener(&handle);
//! db.update();
//! assert_eq!(listener.received(), 1);
//! ```

use pattern_framework::{Observee, Observer, ObserverRegistry};
use std::cell::Cell;
use tracing::{debug, info};

/// The subject.
#[derive(Debug, Default)]
pub struct Database {
    listeners: ObserverRegistry,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifies every registered listener, in registration order.
    ///
    /// Returns how many notifications were delivered.
    pub fn update(&self) -> usize {
        debug!("Database updated");
        self.notify()
    }
}

impl Observee for Database {
    fn registry(&self) -> &ObserverRegistry {
        &self.listeners
    }
}

/// Counts the notifications it receives.
#[derive(Debug, Default)]
pub struct Listener {
    received: Cell<usize>,
}

impl Listener {
    /// What a listener reports for each notification.
    pub const MESSAGE: &'static str = "received notification";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> usize {
        self.received.get()
    }
}

impl Observer for Listener {
    fn update(&self) {
        self.received.set(self.received.get() + 1);
        info!(count = self.received.get(), "{}", Self::MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_update_without_listeners() {
        assert_eq!(Database::new().update(), 0);
    }

    #[test]
    fn test_listener_outliving_database() {
        let listener = Rc::new(Listener::new());
        {
            let db = Database::new();
            let handle: Rc<dyn Observer> = listener.clone();
            db.register_listener(&handle);
            db.update();
        }
        assert_eq!(Rc::strong_count(&listener), 1);
        assert_eq!(listener.received(), 1);
    }
}
