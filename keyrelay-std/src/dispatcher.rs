//! The dispatch table: type-keyed handler storage and delivery.

use keyrelay_core::{Handle, Handler, HandlerId, KeyOf, KeySpace, RuntimeKeys};
use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Object-safe erasure seam: one registered callable behind a uniform
/// "invoke with an erased value" interface.
///
/// The dispatch table is the only caller, and it only routes values whose
/// key matched the entry's registration key, so the downcast inside
/// [`Erased::invoke`] succeeds by construction.
trait ErasedHandler {
    fn invoke(&self, value: &dyn Any);
}

/// Generic bridge from a statically typed [`Handler<T>`] to [`ErasedHandler`].
struct Erased<T, H> {
    handler: H,
    _message: PhantomData<fn(&T)>,
}

impl<T, H> ErasedHandler for Erased<T, H>
where
    T: Any,
    H: Handler<T>,
{
    fn invoke(&self, value: &dyn Any) {
        // A failed downcast is only reachable when a manual key space maps
        // two types to one key. Fail closed: skip rather than misdeliver.
        if let Some(message) = value.downcast_ref::<T>() {
            self.handler.on_message(message);
        }
    }
}

/// One registration: an owned, type-erased callable plus its id.
struct HandlerEntry {
    id: HandlerId,
    handler: Box<dyn ErasedHandler>,
}

/// A type-keyed callback dispatch table.
///
/// Callables registered here are keyed by the message type they accept
/// (deduced at the `register` call site). Publishing a value with
/// [`dispatch`](Dispatcher::dispatch) invokes every handler registered for
/// exactly that type, in registration order. Matching is by exact type key
/// only; there is no supertype or structural matching.
///
/// The table exclusively owns its entries; callers only ever hold opaque
/// [`Handle`]s.
///
/// # Key spaces
///
/// The `S` parameter selects how types are identified. The default,
/// [`RuntimeKeys`], uses [`std::any::TypeId`] and accepts any `'static`
/// type. [`ManualKeys`](crate::ManualKeys) instead requires each
/// message type to opt in with an explicit integer key.
///
/// # Example
///
/// ```
/// use keyrelay_std::Dispatcher;
///
/// struct Tick(u64);
///
/// let mut dispatcher = Dispatcher::new();
/// let handle = dispatcher.register(|t: &Tick| println!("tick {}", t.0));
///
/// dispatcher.dispatch(&Tick(1));
/// dispatcher.unregister(handle);
/// dispatcher.dispatch(&Tick(2)); // no handlers; silent no-op
/// ```
pub struct Dispatcher<S: KeySpace = RuntimeKeys> {
    // Invariant: each vec is sorted by ascending id. It holds because ids
    // are assigned from a monotonic counter and insertion is append-only;
    // removals preserve relative order. Dispatch order and binary-search
    // removal both rely on it.
    handlers: HashMap<S::Key, Vec<HandlerEntry>>,
    next_id: HandlerId,
}

impl<S: KeySpace> Dispatcher<S> {
    /// Create an empty dispatch table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: HandlerId::default(),
        }
    }

    /// Register a handler, keyed by the message type it accepts.
    ///
    /// Returns the [`Handle`] that removes exactly this registration.
    /// Registration cannot fail at runtime: a callable with the wrong shape
    /// (zero/multiple arguments, `&mut` access) has no [`Handler`] impl and
    /// is rejected at compile time.
    pub fn register<T, H>(&mut self, handler: H) -> Handle<S>
    where
        T: KeyOf<S> + Any,
        H: Handler<T>,
    {
        let key = T::key();
        let id = self.next_id;
        self.next_id = id.successor();
        self.handlers.entry(key).or_default().push(HandlerEntry {
            id,
            handler: Box::new(Erased {
                handler,
                _message: PhantomData,
            }),
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(?key, %id, "handler registered");
        Handle::new(key, id)
    }

    /// Remove the registration named by `handle`, if it still exists.
    ///
    /// Idempotent and infallible: unknown keys, already-removed ids, and
    /// default-constructed handles are silent no-ops. Client code may race
    /// its own teardown against an explicit unregister without harm.
    pub fn unregister(&mut self, handle: Handle<S>) {
        let Some(entries) = self.handlers.get_mut(&handle.key()) else {
            return;
        };
        if let Ok(index) = entries.binary_search_by_key(&handle.id(), |entry| entry.id) {
            entries.remove(index);
            #[cfg(feature = "tracing")]
            tracing::trace!(key = ?handle.key(), id = %handle.id(), "handler unregistered");
        }
    }

    /// Publish a value: invoke every handler registered for exactly its
    /// type, in registration order, with a shared reference to `value`.
    ///
    /// No handlers for the type is a normal, silent state. If a handler
    /// panics, the panic propagates to the caller and the remaining handlers
    /// for this call do not run (fail-fast).
    pub fn dispatch<T>(&self, value: &T)
    where
        T: KeyOf<S> + Any,
    {
        let Some(entries) = self.handlers.get(&T::key()) else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(key = ?T::key(), handlers = entries.len(), "dispatching");
        for entry in entries {
            entry.handler.invoke(value);
        }
    }

    /// Number of handlers currently registered for message type `T`.
    pub fn handler_count<T: KeyOf<S>>(&self) -> usize {
        self.handlers.get(&T::key()).map_or(0, Vec::len)
    }

    /// Total number of registrations across all message types.
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }
}

impl<S: KeySpace> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}
