//! Handler trait for registered callables.

/// A callable that receives published values of one concrete message type.
///
/// Handlers are the unit of registration: the dispatch table deduces `T`
/// from the handler at the `register` call site, keys the registration on
/// `T`, and later delivers every published `T` to the handler by shared
/// reference.
///
/// The blanket impl below covers every `Fn(&T)`, so the three common
/// callable shapes all register uniformly:
///
/// - plain functions: `fn on_tick(t: &Tick)`
/// - capturing closures: `move |t: &Tick| { .. }`
/// - structs with a hand-written `Handler<Tick>` impl
///
/// # Read-only delivery
///
/// Delivery is `&T`, never `&mut T`: one published value is shared by every
/// handler registered for its type, so in-place mutation is rejected at
/// compile time. A closure over `&mut T`, an `FnMut`-only closure, or a
/// callable with zero or several parameters has no `Handler<T>` impl and
/// cannot be registered.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle messages of type `{T}`",
    label = "missing `Handler<{T}>` implementation",
    note = "handlers take exactly one argument, by shared reference: `Fn(&{T})`",
    note = "zero-argument, multi-argument, by-`&mut`, and `FnMut`-only callables are rejected"
)]
pub trait Handler<T>: 'static {
    /// Called once for each published value of type `T`.
    fn on_message(&self, message: &T);
}

impl<T, F> Handler<T> for F
where
    F: Fn(&T) + 'static,
{
    fn on_message(&self, message: &T) {
        (self)(message)
    }
}
