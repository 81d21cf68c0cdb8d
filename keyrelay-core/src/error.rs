//! Error types for keyrelay.
//!
//! The runtime error surface is deliberately narrow. By contract, `dispatch`
//! with no registered handlers and `unregister` with a stale, repeated, or
//! default handle are silent no-ops, not errors. The one thing that can fail
//! at runtime is mutating a shared dispatcher from inside a running handler.

use thiserror::Error;

/// Errors from keyrelay operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    /// The shared dispatcher is borrowed by an in-progress operation,
    /// typically a handler trying to register or unregister during the
    /// dispatch that invoked it.
    #[error("dispatcher is busy (re-entrant access from inside a handler)")]
    Reentrant,
}
