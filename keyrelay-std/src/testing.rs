//! Testing utilities for keyrelay.
//!
//! Ready-made handlers for asserting on dispatch behavior:
//!
//! - [`CountingHandler`]: counts invocations for one message type
//! - [`RecordingHandler`]: records a clone of every message it receives
//!
//! Both are cheaply cloneable probes: register one clone, keep another to
//! inspect after dispatching. Single-threaded by design, like the rest of
//! the crate.

use keyrelay_core::Handler;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

/// A handler that counts how many times it was invoked.
///
/// # Example
///
/// ```
/// use keyrelay_std::{testing::CountingHandler, Dispatcher};
///
/// struct Tick;
///
/// let probe = CountingHandler::<Tick>::new();
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(probe.clone());
///
/// dispatcher.dispatch(&Tick);
/// dispatcher.dispatch(&Tick);
/// assert_eq!(probe.count(), 2);
/// ```
pub struct CountingHandler<T> {
    count: Rc<Cell<usize>>,
    _message: PhantomData<fn(&T)>,
}

impl<T> CountingHandler<T> {
    /// Create a handler with a zeroed counter.
    pub fn new() -> Self {
        Self {
            count: Rc::new(Cell::new(0)),
            _message: PhantomData,
        }
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl<T> Default for CountingHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CountingHandler<T> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            _message: PhantomData,
        }
    }
}

impl<T: 'static> Handler<T> for CountingHandler<T> {
    fn on_message(&self, _message: &T) {
        self.count.set(self.count.get() + 1);
    }
}

/// A handler that records a clone of every message it receives.
///
/// # Example
///
/// ```
/// use keyrelay_std::{testing::RecordingHandler, Dispatcher};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Named(&'static str);
///
/// let probe = RecordingHandler::<Named>::new();
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.register(probe.clone());
///
/// dispatcher.dispatch(&Named("a"));
/// dispatcher.dispatch(&Named("b"));
/// assert_eq!(probe.messages(), vec![Named("a"), Named("b")]);
/// ```
pub struct RecordingHandler<T> {
    messages: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone> RecordingHandler<T> {
    /// Create a handler with an empty record.
    pub fn new() -> Self {
        Self {
            messages: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A clone of the recorded messages, in receipt order.
    pub fn messages(&self) -> Vec<T> {
        self.messages.borrow().clone()
    }

    /// Number of recorded messages.
    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Clear the record.
    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl<T: Clone> Default for RecordingHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordingHandler<T> {
    fn clone(&self) -> Self {
        Self {
            messages: self.messages.clone(),
        }
    }
}

impl<T: Clone + 'static> Handler<T> for RecordingHandler<T> {
    fn on_message(&self, message: &T) {
        self.messages.borrow_mut().push(message.clone());
    }
}
