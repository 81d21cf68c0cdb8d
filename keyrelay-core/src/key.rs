//! Key-space contract: mapping static types to process-stable identifiers.
//!
//! A key space decides how a message type is turned into the identifier the
//! dispatch table indexes on. The default, [`RuntimeKeys`], is backed by
//! [`std::any::TypeId`] and every `'static` type participates; its blanket
//! [`KeyOf`] impl has to live next to the trait, which is why it is defined
//! here rather than in `keyrelay-std`. `keyrelay-std` adds `ManualKeys`,
//! where types opt in with an explicitly assigned integer. Custom spaces
//! only need to satisfy the contract below.

use std::any::TypeId;
use std::fmt::Debug;
use std::hash::Hash;

/// A scheme for identifying message types.
///
/// The associated [`Key`](KeySpace::Key) must be injective over the types
/// that participate in the space (distinct types map to distinct keys) and
/// stable for the lifetime of the process. Keys are never meaningful across
/// processes.
///
/// [`null()`](KeySpace::null) provides the sentinel key carried by
/// default-constructed [`Handle`](crate::Handle)s. No real message type may
/// map to it.
pub trait KeySpace: 'static {
    /// The per-type identifier the dispatch table indexes on.
    type Key: Copy + Eq + Hash + Debug + 'static;

    /// The sentinel key denoting "no type".
    fn null() -> Self::Key;
}

/// Maps the implementing type to its key within the space `S`.
///
/// For a runtime-reflection space this is a blanket impl over all `'static`
/// types; for a manual space each message type opts in with its own impl
/// (normally written via a macro such as `manual_keys!`).
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no key in the key space `{S}`",
    label = "not a registered message type for this key space",
    note = "manual key spaces require each message type to opt in explicitly"
)]
pub trait KeyOf<S: KeySpace>: 'static {
    /// The key identifying this type within `S`.
    ///
    /// Must return the same value every call for the whole process run.
    fn key() -> S::Key;
}

/// Uninhabited sentinel behind [`RuntimeKeys::null`]. Private, so no user
/// registration can ever be filed under the null key.
enum NoMessage {}

/// The default key space: types are identified by [`std::any::TypeId`].
///
/// Every `'static` type participates automatically, with no opt-in.
/// `TypeId` is injective and stable for the process lifetime, which is
/// exactly the contract [`KeySpace`] asks for. (It is not stable across
/// builds or processes, but keys never leave the process.)
pub struct RuntimeKeys;

impl KeySpace for RuntimeKeys {
    type Key = TypeId;

    fn null() -> TypeId {
        TypeId::of::<NoMessage>()
    }
}

impl<T: 'static> KeyOf<RuntimeKeys> for T {
    fn key() -> TypeId {
        TypeId::of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_keys_are_injective() {
        assert_ne!(
            <u32 as KeyOf<RuntimeKeys>>::key(),
            <u64 as KeyOf<RuntimeKeys>>::key()
        );
    }

    #[test]
    fn runtime_null_key_matches_no_real_type() {
        assert_ne!(RuntimeKeys::null(), <u32 as KeyOf<RuntimeKeys>>::key());
        assert_ne!(RuntimeKeys::null(), <() as KeyOf<RuntimeKeys>>::key());
    }
}
