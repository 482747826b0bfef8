//! # Singleton
//!
//! Exactly one logical instance, reachable process-wide, created on first use.
//!
//! [`Singleton`] is meant to live in a `static`. It owns its instance for the rest of the
//! process and only hands out shared references, so there is no global pointer to free
//! and no way to observe a half-built value.
//!
//! ```rust
//! use pattern_framework::Singleton;
//!
//! static GREETING: Singleton<String> = Singleton::new("greeting");
//!
//! let first = GREETING.get_or_init(|| "hello".to_string()).unwrap();
//! let second = GREETING.get_or_init(|| "ignored".to_string()).unwrap();
//! assert!(std::ptr::eq(first, second));
//! assert_eq!(second, "hello");
//! ```
//!
//! ## Re-entrancy
//!
//! An initializer that reaches back into the singleton it is building would deadlock a
//! plain `OnceLock`. The thread running the initializer is recorded, and a nested call
//! from that thread returns [`PatternError::ReentrantInit`] instead. Other threads simply
//! wait for the first initializer to finish.

use crate::error::PatternError;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::thread::{self, ThreadId};
use tracing::{debug, info};

/// A lazily initialized, process-wide instance of `T`.
pub struct Singleton<T> {
    name: &'static str,
    cell: OnceLock<T>,
    initializer: Mutex<Option<ThreadId>>,
}

impl<T> Singleton<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceLock::new(),
            initializer: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The instance, if it has been created.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the instance, running `init` first if nobody has yet.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> Result<&T, PatternError> {
        if let Some(instance) = self.cell.get() {
            return Ok(instance);
        }

        let me = thread::current().id();
        let claimed = {
            // Never held across `init`, so a poisoned lock still has consistent contents.
            let mut owner = self
                .initializer
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match *owner {
                Some(id) if id == me => return Err(PatternError::ReentrantInit(self.name)),
                Some(_) => false,
                None => {
                    *owner = Some(me);
                    true
                }
            }
        };

        let _release = claimed.then(|| {
            debug!(singleton = self.name, "Initializing");
            Release(&self.initializer)
        });
        let instance = self.cell.get_or_init(init);
        if claimed {
            info!(singleton = self.name, "Initialized");
        }
        Ok(instance)
    }
}

/// Clears the recorded initializer thread, even if the initializer panics.
struct Release<'a>(&'a Mutex<Option<ThreadId>>);

impl Drop for Release<'_> {
    fn drop(&mut self) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
