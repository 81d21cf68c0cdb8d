//! Registration handles and handler identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::key::KeySpace;

/// Identity of one registration, unique within a single dispatch table.
///
/// Ids are assigned from a monotonic per-table counter and are never reused,
/// even after the registration is removed. A stale handle therefore stays
/// detectably invalid instead of silently aliasing a later registration.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct HandlerId(u64);

impl HandlerId {
    /// Construct an id from its raw counter value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id that a table's counter assigns after this one.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque removal token issued at registration.
///
/// A handle is a plain `(key, id)` pair: the sole capability needed to later
/// remove exactly that registration. It owns nothing: using it twice, or
/// after the table dropped the entry independently, is a harmless no-op.
///
/// Handles are `Default`-constructible (carrying the key space's null key)
/// so they can sit in containers before being assigned.
pub struct Handle<S: KeySpace> {
    key: S::Key,
    id: HandlerId,
}

impl<S: KeySpace> Handle<S> {
    /// Build a handle from its parts.
    pub fn new(key: S::Key, id: HandlerId) -> Self {
        Self { key, id }
    }

    /// The type key this handle's registration was filed under.
    pub fn key(&self) -> S::Key {
        self.key
    }

    /// The registration's id.
    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Whether this is a default-constructed handle that never named a
    /// registration.
    pub fn is_null(&self) -> bool {
        self.key == S::null()
    }
}

impl<S: KeySpace> Default for Handle<S> {
    fn default() -> Self {
        Self {
            key: S::null(),
            id: HandlerId::default(),
        }
    }
}

impl<S: KeySpace> Clone for Handle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: KeySpace> Copy for Handle<S> {}

impl<S: KeySpace> PartialEq for Handle<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.id == other.id
    }
}

impl<S: KeySpace> Eq for Handle<S> {}

impl<S: KeySpace> Hash for Handle<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.id.hash(state);
    }
}

impl<S: KeySpace> fmt::Debug for Handle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("key", &self.key)
            .field("id", &self.id)
            .finish()
    }
}
