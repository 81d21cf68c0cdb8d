//! Handle-tracking client: automated registration cleanup.

use keyrelay_core::{Handle, Handler, KeyOf, KeySpace, RelayError, RuntimeKeys};
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::dispatcher::Dispatcher;

/// A dispatcher behind shared single-threaded ownership, as used by
/// [`Subscriber`].
pub type SharedDispatcher<S = RuntimeKeys> = Rc<RefCell<Dispatcher<S>>>;

/// A client that tracks every handle it is issued and releases them all on
/// its own teardown.
///
/// The subscriber holds a shared reference to the dispatcher and a list of
/// the handles it registered, kept in ascending-id order. Dropping the
/// subscriber unregisters everything it still tracks; handles the
/// dispatcher already dropped independently are tolerated (unregister is a
/// no-op for them by contract).
///
/// All operations go through [`RefCell::try_borrow_mut`], so calling them
/// from inside a running handler reports [`RelayError::Reentrant`] instead
/// of panicking.
///
/// # Example
///
/// ```
/// use keyrelay_std::{Dispatcher, SharedDispatcher, Subscriber};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct Ping;
///
/// let dispatcher: SharedDispatcher = Rc::new(RefCell::new(Dispatcher::new()));
///
/// {
///     let mut subscriber = Subscriber::new(dispatcher.clone());
///     subscriber.register(|_: &Ping| println!("ping")).unwrap();
///     dispatcher.borrow().dispatch(&Ping); // prints
/// } // subscriber dropped; its registrations go with it
///
/// dispatcher.borrow().dispatch(&Ping); // silent
/// ```
pub struct Subscriber<S: KeySpace = RuntimeKeys> {
    dispatcher: SharedDispatcher<S>,
    // Ascending-id order, maintained by append-only pushes of fresh
    // (monotonic) ids. Supports binary-search removal.
    handles: Vec<Handle<S>>,
}

impl<S: KeySpace> Subscriber<S> {
    /// Create a subscriber bound to `dispatcher`.
    pub fn new(dispatcher: SharedDispatcher<S>) -> Self {
        Self {
            dispatcher,
            handles: Vec::new(),
        }
    }

    /// Register a handler on the shared dispatcher and track its handle.
    pub fn register<T, H>(&mut self, handler: H) -> Result<Handle<S>, RelayError>
    where
        T: KeyOf<S> + Any,
        H: Handler<T>,
    {
        let handle = self
            .dispatcher
            .try_borrow_mut()
            .map_err(|_| RelayError::Reentrant)?
            .register(handler);
        self.handles.push(handle);
        Ok(handle)
    }

    /// Release a single tracked handle.
    ///
    /// A handle this subscriber does not track (including default handles)
    /// is a no-op.
    pub fn unregister(&mut self, handle: Handle<S>) -> Result<(), RelayError> {
        let Ok(index) = self.handles.binary_search_by_key(&handle.id(), Handle::id) else {
            return Ok(());
        };
        self.dispatcher
            .try_borrow_mut()
            .map_err(|_| RelayError::Reentrant)?
            .unregister(handle);
        self.handles.remove(index);
        Ok(())
    }

    /// Release the first tracked handle registered for message type `T`.
    ///
    /// No tracked handle for `T` is a no-op.
    pub fn unregister_type<T: KeyOf<S>>(&mut self) -> Result<(), RelayError> {
        let key = T::key();
        let Some(index) = self.handles.iter().position(|h| h.key() == key) else {
            return Ok(());
        };
        let handle = self.handles[index];
        self.dispatcher
            .try_borrow_mut()
            .map_err(|_| RelayError::Reentrant)?
            .unregister(handle);
        self.handles.remove(index);
        Ok(())
    }

    /// Release every tracked handle exactly once and clear the list.
    pub fn unregister_all(&mut self) -> Result<(), RelayError> {
        let mut dispatcher = self
            .dispatcher
            .try_borrow_mut()
            .map_err(|_| RelayError::Reentrant)?;
        for handle in self.handles.drain(..) {
            dispatcher.unregister(handle);
        }
        Ok(())
    }

    /// The handles currently tracked, in ascending-id order.
    pub fn handles(&self) -> &[Handle<S>] {
        &self.handles
    }

    /// The shared dispatcher this subscriber registers on.
    pub fn dispatcher(&self) -> &SharedDispatcher<S> {
        &self.dispatcher
    }
}

impl<S: KeySpace> Drop for Subscriber<S> {
    fn drop(&mut self) {
        // Best effort: if the dispatcher is mid-dispatch (subscriber dropped
        // from inside a handler), skip rather than panic in drop.
        let _ = self.unregister_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Ping;
    struct Pong;

    fn shared() -> SharedDispatcher {
        Rc::new(RefCell::new(Dispatcher::new()))
    }

    #[test]
    fn drop_releases_all_tracked_handles() {
        let dispatcher = shared();
        {
            let mut subscriber = Subscriber::new(dispatcher.clone());
            subscriber.register(|_: &Ping| {}).unwrap();
            subscriber.register(|_: &Pong| {}).unwrap();
            assert_eq!(dispatcher.borrow().len(), 2);
        }
        assert!(dispatcher.borrow().is_empty());
    }

    #[test]
    fn unregister_type_drops_first_match_only() {
        let hits = Rc::new(Cell::new(0));
        let dispatcher = shared();
        let mut subscriber = Subscriber::new(dispatcher.clone());

        let first = hits.clone();
        subscriber
            .register(move |_: &Ping| first.set(first.get() + 10))
            .unwrap();
        let second = hits.clone();
        subscriber
            .register(move |_: &Ping| second.set(second.get() + 1))
            .unwrap();

        subscriber.unregister_type::<Ping>().unwrap();
        dispatcher.borrow().dispatch(&Ping);
        assert_eq!(hits.get(), 1);
        assert_eq!(subscriber.handles().len(), 1);
    }

    #[test]
    fn tolerates_handles_the_table_dropped_independently() {
        let dispatcher = shared();
        let mut subscriber = Subscriber::new(dispatcher.clone());
        let handle = subscriber.register(|_: &Ping| {}).unwrap();

        // The table drops the registration behind the subscriber's back.
        dispatcher.borrow_mut().unregister(handle);

        subscriber.unregister_all().unwrap();
        assert!(subscriber.handles().is_empty());
    }

    #[test]
    fn reentrant_registration_is_reported() {
        let dispatcher = shared();
        let subscriber = Rc::new(RefCell::new(Subscriber::new(dispatcher.clone())));
        let observed = Rc::new(Cell::new(None));

        let inner_subscriber = subscriber.clone();
        let inner_observed = observed.clone();
        subscriber
            .borrow_mut()
            .register(move |_: &Ping| {
                let result = inner_subscriber.borrow_mut().register(|_: &Pong| {});
                inner_observed.set(result.err());
            })
            .unwrap();

        dispatcher.borrow().dispatch(&Ping);
        assert_eq!(observed.get(), Some(RelayError::Reentrant));
    }
}
