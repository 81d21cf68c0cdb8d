//! # keyrelay - Type-Keyed Callback Dispatch
//!
//! `keyrelay` is a single-threaded dispatch table keyed by message type:
//! register callables that accept `&T`, publish a value of a concrete type,
//! and every handler registered for exactly that type fires in registration
//! order. Removal is via opaque handles and always idempotent.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyrelay::Dispatcher;
//!
//! struct Connected { peer: String }
//! struct Disconnected;
//!
//! let mut dispatcher = Dispatcher::new();
//!
//! dispatcher.register(|c: &Connected| println!("hello, {}", c.peer));
//! let handle = dispatcher.register(|_: &Disconnected| println!("bye"));
//!
//! dispatcher.dispatch(&Connected { peer: "alice".into() }); // prints
//! dispatcher.unregister(handle);
//! dispatcher.dispatch(&Disconnected); // nobody listening; silent
//! ```
//!
//! ## Pieces
//!
//! - [`Dispatcher`] - the table: `register` / `unregister` / `dispatch`.
//! - [`Handle`] / [`HandlerId`] - opaque removal tokens.
//! - [`Handler`] - the callable seam; every `Fn(&T)` qualifies, as do
//!   hand-written impls on structs.
//! - [`KeySpace`] / [`KeyOf`] - pluggable type identity. [`RuntimeKeys`]
//!   (the default) uses [`std::any::TypeId`]; [`ManualKeys`] requires each
//!   type to opt in via [`manual_keys!`].
//! - [`Subscriber`] - tracks issued handles and releases them on drop.
//!
//! Dispatch is by exact type only (no supertype or structural matching),
//! and the whole crate is synchronous and single-threaded by contract.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use keyrelay_core::{Handle, Handler, HandlerId, KeyOf, KeySpace, RelayError, RuntimeKeys};

pub use keyrelay_std::{
    Dispatcher, ManualKey, ManualKeys, SharedDispatcher, Subscriber, manual_keys,
};

/// Testing utilities: counting and recording probe handlers.
pub mod testing {
    pub use keyrelay_std::testing::{CountingHandler, RecordingHandler};
}

/// Prelude module - common imports for keyrelay.
///
/// # Usage
///
/// ```rust,ignore
/// use keyrelay::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Dispatcher, Handle, Handler, KeyOf, KeySpace, RelayError, Subscriber};
}
