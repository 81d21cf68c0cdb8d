//! # keyrelay-std
//!
//! Standard implementations for the keyrelay typed dispatch table.
//!
//! This crate provides:
//! - **The dispatch table**: [`Dispatcher`]
//! - **Manual key space**: [`ManualKeys`], [`ManualKey`], the
//!   [`manual_keys!`] macro
//! - **Handle-tracking client**: [`Subscriber`]
//! - **Testing helpers**: [`testing`]
//!
//! The trait contracts (and the default [`TypeId`](std::any::TypeId)-backed
//! key space) live in `keyrelay-core`.
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events on register, unregister, and dispatch.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export for macro use and for downstream crates that only depend on
// keyrelay-std.
pub use keyrelay_core;

mod dispatcher;
mod keys;
mod subscriber;
pub mod testing;

pub use dispatcher::Dispatcher;
pub use keys::{ManualKey, ManualKeys};
pub use subscriber::{SharedDispatcher, Subscriber};
