//! # keyrelay-core
//!
//! Core traits for the keyrelay typed dispatch table.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that defines message types and handlers without needing the full
//! `keyrelay-std` implementation.
//!
//! # The dispatch model
//!
//! keyrelay is a type-keyed callback table: callers register callables that
//! accept `&T` for some concrete message type `T`, and later publish a value
//! of a concrete type. Every handler registered for exactly that type fires,
//! in registration order. The pieces defined here:
//!
//! - [`KeySpace`] / [`KeyOf`] - the contract for mapping a static type to a
//!   process-stable, hashable identifier. The dispatch table depends only on
//!   this contract, never on a particular identity mechanism.
//! - [`Handler`] - the callable seam. A blanket impl covers every
//!   `Fn(&T)`, so plain functions, capturing closures, and hand-written
//!   implementations all register the same way.
//! - [`Handle`] / [`HandlerId`] - the opaque removal token issued at
//!   registration and the monotonic identity behind it.
//! - [`RelayError`] - the (deliberately narrow) runtime error surface.
//!
//! The table itself lives in `keyrelay-std`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handle;
mod handler;
mod key;

pub use error::RelayError;
pub use handle::{Handle, HandlerId};
pub use handler::Handler;
pub use key::{KeyOf, KeySpace, RuntimeKeys};
