#[cfg(test)]
#[path = "emitter_test.rs"]
mod emitter_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Named, payload-free events.
#[derive(Default)]
pub struct Emitter {
    listeners: RefCell<HashMap<String, Vec<Rc<dyn Fn()>>>>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, event: &str, callback: impl Fn() + 'static) {
        self.listeners
            .borrow_mut()
            .entry(event.to_owned())
            .or_default()
            .push(Rc::new(callback));
    }

    /// Invoke every callback registered for `event` before this call.
    pub fn emit(&self, event: &str) {
        let callbacks = self.listeners.borrow().get(event).cloned().unwrap_or_default();
        for callback in callbacks {
            callback();
        }
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.borrow().get(event).map_or(0, Vec::len)
    }
}
