//! Caller-owned state holders.
//!
//! Components never own interactive values. A toggle flag, a slider position
//! or the contents of a text field live in a [`State`] created by the caller,
//! read while building the tree and written from callbacks.
//!
//! ```
//! use neumorphic_ui::State;
//!
//! let checked = State::new(false);
//! let handle = checked.clone();
//! handle.set(true);
//! assert!(checked.get());
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    observers: RwLock<Vec<Observer<T>>>,
}

/// A shared, observable value.
///
/// Clones share the same storage. Observers registered with
/// [`State::subscribe`] run synchronously after every mutation, after the
/// write lock has been released, so they may read the state again.
pub struct State<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("State").field(&*self.inner.value.read()).finish()
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> State<T> {
    /// Creates a new state holder.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                observers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Executes a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.read())
    }

    /// Executes a closure with a mutable reference to the stored value, then
    /// notifies observers.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.value.write());
        self.notify();
        result
    }

    /// Returns a clone of the stored value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replaces the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }

    /// Registers an observer called with the new value after each mutation.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) {
        self.inner.observers.write().push(Arc::new(observer));
    }

    fn notify(&self) {
        let observers = self.inner.observers.read().clone();
        if observers.is_empty() {
            return;
        }
        trace!(count = observers.len(), "notifying state observers");
        let value = self.inner.value.read();
        for observer in &observers {
            observer(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn clones_share_storage() {
        let state = State::new(1);
        let other = state.clone();
        other.with_mut(|value| *value += 1);
        assert_eq!(state.get(), 2);
        assert_eq!(state, other);
        assert_ne!(state, State::new(2));
    }

    #[test]
    fn observers_see_every_mutation() {
        let state = State::new(0.0f32);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        state.subscribe(move |value| {
            assert!(*value > 0.0);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        state.set(0.5);
        state.with_mut(|value| *value += 0.25);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(state.get(), 0.75);
    }
}
