use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

type Observer<T> = Rc<dyn Fn(&T)>;

struct SharedValueInner<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    observers: RefCell<SmallVec<[(u64, Observer<T>); 2]>>,
    next_observer_id: Cell<u64>,
}

/// Single-threaded value cell shared between one writer and many readers.
///
/// Cloning the handle shares the cell. Every write bumps [`SharedValue::version`] and
/// notifies observers, even when the new value equals the old one. Observers run
/// after the cell borrow is released, so they may write to this or any other cell.
pub struct SharedValue<T> {
    inner: Rc<SharedValueInner<T>>,
}

impl<T> Clone for SharedValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> SharedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(SharedValueInner {
                value: RefCell::new(value),
                version: Cell::new(0),
                observers: RefCell::new(SmallVec::new()),
                next_observer_id: Cell::new(1),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Run `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn set(&self, value: T) {
        let snapshot = value.clone();
        *self.inner.value.borrow_mut() = value;
        self.publish(snapshot);
    }

    /// Mutate in place, then notify observers.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot) = {
            let mut value = self.inner.value.borrow_mut();
            let result = f(&mut value);
            (result, value.clone())
        };
        self.publish(snapshot);
        result
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn read_only(&self) -> ReadOnlyValue<T> {
        ReadOnlyValue {
            inner: self.clone(),
        }
    }

    /// Register `observer` for every subsequent write.
    pub fn observe(&self, observer: impl Fn(&T) + 'static) -> ObserverRegistration {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        let weak: Weak<SharedValueInner<T>> = Rc::downgrade(&self.inner);
        ObserverRegistration {
            remove: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .observers
                        .borrow_mut()
                        .retain(|(observer_id, _)| *observer_id != id);
                }
            })),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    fn publish(&self, snapshot: T) {
        self.inner.version.set(self.inner.version.get() + 1);
        let observers: SmallVec<[Observer<T>; 2]> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(&snapshot);
        }
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for SharedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedValue")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}

/// Read side of a [`SharedValue`], handed to projections and listeners.
pub struct ReadOnlyValue<T> {
    inner: SharedValue<T>,
}

impl<T> Clone for ReadOnlyValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> ReadOnlyValue<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.with(f)
    }

    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    pub fn observe(&self, observer: impl Fn(&T) + 'static) -> ObserverRegistration {
        self.inner.observe(observer)
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for ReadOnlyValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnlyValue").field(&self.inner).finish()
    }
}

/// Keeps an observer registered until dropped or cancelled.
#[must_use = "dropping the registration removes the observer"]
pub struct ObserverRegistration {
    remove: Option<Box<dyn FnOnce()>>,
}

impl ObserverRegistration {
    pub fn cancel(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for ObserverRegistration {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

#[cfg(test)]
#[path = "tests/shared_value_tests.rs"]
mod tests;
