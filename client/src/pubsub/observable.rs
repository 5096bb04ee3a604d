#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Callback registered on an [`Observable`]. Identity is the `Rc` pointer.
pub type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A single value with synchronous change notification.
///
/// `set` notifies even when the new value equals the old one.
pub struct Observable<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replace the value and notify every subscriber in registration order.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        let current = self.get();
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(&current);
        }
    }

    /// Register `subscriber` and call it once with the current value.
    pub fn subscribe(&self, subscriber: &Subscriber<T>) {
        self.subscribers.borrow_mut().push(subscriber.clone());
        let current = self.get();
        subscriber(&current);
    }

    /// Remove the first registration of `subscriber`; unknown callbacks are
    /// ignored.
    pub fn unsubscribe(&self, subscriber: &Subscriber<T>) {
        let mut subscribers = self.subscribers.borrow_mut();
        if let Some(index) = subscribers.iter().position(|s| Rc::ptr_eq(s, subscriber)) {
            subscribers.remove(index);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
