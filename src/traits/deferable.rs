/// A callable that can be invoked once with no arguments.
///
/// This is the admission check for [`ScopeGuard`](crate::ScopeGuard): every
/// `FnOnce()` closure or function item qualifies through the blanket
/// implementation, and anything else is rejected at compile time.
///
/// ```compile_fail
/// use kirho::ScopeGuard;
///
/// let _guard = ScopeGuard::new(42);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be deferred to scope exit",
    label = "this value is not callable with zero arguments",
    note = "pass a closure such as `|| cleanup()` or use the `defer!` macro"
)]
pub trait Deferable {
    /// Consumes the callable and invokes it.
    fn run(self);
}

impl<F> Deferable for F
where
    F: FnOnce(),
{
    #[inline]
    fn run(self) {
        self()
    }
}
