//! The manual key space: explicit per-type key assignment.

use keyrelay_core::{KeyOf, KeySpace};

/// A key in the [`ManualKeys`] space: an explicitly assigned integer.
///
/// Key `0` is reserved as the null key for default-constructed handles.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ManualKey(u32);

impl ManualKey {
    /// The reserved null key.
    pub const NULL: ManualKey = ManualKey(0);

    /// Build a key from its assigned integer.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is 0, which is reserved. In the usual pattern (keys
    /// assigned in a `const`, e.g. via [`manual_keys!`](crate::manual_keys))
    /// this fires at compile time.
    pub const fn new(raw: u32) -> Self {
        assert!(raw != 0, "manual key 0 is reserved for the null key");
        Self(raw)
    }

    /// The assigned integer.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A key space with no runtime reflection: each message type opts in with a
/// pre-assigned unique integer.
///
/// Useful when dispatch keys must be deterministic small integers rather
/// than `TypeId`s. Injectivity is the user's contract: assigning the same
/// integer to two types breaks dispatch for both (values whose dynamic type
/// does not match a handler's registered type are skipped, never
/// misdelivered).
///
/// Implement [`KeyOf<ManualKeys>`] for each message type, normally via
/// [`manual_keys!`](crate::manual_keys):
///
/// ```
/// use keyrelay_std::{manual_keys, Dispatcher, ManualKeys};
///
/// struct Login;
/// struct Logout;
///
/// manual_keys! {
///     Login => 1,
///     Logout => 2,
/// }
///
/// let mut dispatcher = Dispatcher::<ManualKeys>::new();
/// dispatcher.register(|_: &Login| println!("logged in"));
/// dispatcher.dispatch(&Login);
/// ```
pub struct ManualKeys;

impl KeySpace for ManualKeys {
    type Key = ManualKey;

    fn null() -> ManualKey {
        ManualKey::NULL
    }
}

/// Assign manual keys to message types.
///
/// Expands to one `KeyOf<ManualKeys>` impl per entry. Keys are evaluated in
/// a `const`, so the reserved key 0 is rejected at compile time. Keeping the
/// assignment unique per type is up to the caller.
///
/// ```
/// use keyrelay_std::manual_keys;
///
/// struct Opened;
/// struct Closed;
///
/// manual_keys! {
///     Opened => 10,
///     Closed => 11,
/// }
/// ```
#[macro_export]
macro_rules! manual_keys {
    ($($ty:ty => $key:expr),+ $(,)?) => {
        $(
            impl $crate::keyrelay_core::KeyOf<$crate::ManualKeys> for $ty {
                fn key() -> $crate::ManualKey {
                    const KEY: $crate::ManualKey = $crate::ManualKey::new($key);
                    KEY
                }
            }
        )+
    };
}
