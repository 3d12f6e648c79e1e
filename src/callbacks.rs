//! Identity-keyed listener sets for interaction callbacks.

use std::rc::Rc;

use crate::data_types::BoxBounds;

/// Listener invoked with the current selection bounds at each drag phase.
pub type DragBoxCallback = Rc<dyn Fn(&BoxBounds)>;

/// An ordered set of listeners keyed by `Rc` identity.
///
/// Two closures with identical code are still distinct listeners; equality
/// is the allocation, compared with [`Rc::ptr_eq`]. Adding a listener that
/// is already present is a no-op, as is removing one that was never added.
/// Registration order is preserved and is the notification order.
pub struct CallbackSet<T: ?Sized> {
    callbacks: Vec<Rc<T>>,
}

impl<T: ?Sized> CallbackSet<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    pub fn add(&mut self, callback: Rc<T>) {
        if !self.contains(&callback) {
            self.callbacks.push(callback);
        }
    }

    pub fn remove(&mut self, callback: &Rc<T>) {
        self.callbacks.retain(|cb| !Rc::ptr_eq(cb, callback));
    }

    pub fn contains(&self, callback: &Rc<T>) -> bool {
        self.callbacks.iter().any(|cb| Rc::ptr_eq(cb, callback))
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Current listeners in registration order. Notification iterates this
    /// snapshot, so a listener that mutates the set mid-round cannot
    /// invalidate the round in progress.
    pub fn snapshot(&self) -> Vec<Rc<T>> {
        self.callbacks.clone()
    }
}

impl CallbackSet<dyn Fn(&BoxBounds)> {
    /// Invoke every listener in registration order with `bounds`.
    pub fn call(&self, bounds: &BoxBounds) {
        for callback in self.snapshot() {
            callback(bounds);
        }
    }
}

impl<T: ?Sized> Default for CallbackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
