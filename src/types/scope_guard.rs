use crate::traits::Deferable;

/// Runs a callable exactly once when the guard goes out of scope.
///
/// The guard is bound to its callable at construction and fires from `Drop`,
/// so it runs on every exit path of the enclosing block: fall-through,
/// early `return`, `?`, `break`, and `continue`. Guards in the same scope
/// fire in reverse order of construction, and guards in nested scopes fire
/// innermost first.
///
/// There is no way to run the callable early or to cancel it; scope
/// placement is the only control. The guard is neither `Copy` nor `Clone`.
///
/// The callable has no caller left to report to when it runs, so it must
/// deal with its own failures.
///
/// Bind the guard to a named variable. `let _ = ScopeGuard::new(..)` drops it
/// immediately and fires the callable on the spot; prefer the
/// [`defer!`](crate::defer) macro, which picks a binding for you.
///
/// # Examples
///
/// ```
/// use kirho::ScopeGuard;
/// use std::cell::Cell;
///
/// let closed = Cell::new(false);
/// {
///     let _guard = ScopeGuard::new(|| closed.set(true));
///     assert!(!closed.get());
/// }
/// assert!(closed.get());
/// ```
///
/// Early returns fire the guard too:
///
/// ```
/// use kirho::ScopeGuard;
/// use std::cell::Cell;
///
/// fn lookup(key: &str, released: &Cell<u32>) -> Option<u32> {
///     let _guard = ScopeGuard::new(|| released.set(released.get() + 1));
///     if key.is_empty() {
///         return None;
///     }
///     Some(key.len() as u32)
/// }
///
/// let released = Cell::new(0);
/// assert_eq!(lookup("", &released), None);
/// assert_eq!(lookup("abc", &released), Some(3));
/// assert_eq!(released.get(), 2);
/// ```
#[must_use = "a scope guard fires as soon as it is dropped; bind it to a variable"]
pub struct ScopeGuard<F>
where
    F: Deferable,
{
    deferred: Option<F>,
}

impl<F> ScopeGuard<F>
where
    F: Deferable,
{
    /// Binds `deferred` to the end of the current scope.
    ///
    /// # Arguments
    ///
    /// * `deferred` - Any `FnOnce()` callable
    #[inline]
    pub fn new(deferred: F) -> Self {
        Self { deferred: Some(deferred) }
    }
}

impl<F> Drop for ScopeGuard<F>
where
    F: Deferable,
{
    fn drop(&mut self) {
        if let Some(deferred) = self.deferred.take() {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "kirho::scope_guard", "running deferred action");

            deferred.run();
        }
    }
}

impl<F> core::fmt::Debug for ScopeGuard<F>
where
    F: Deferable,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("armed", &self.deferred.is_some())
            .finish()
    }
}
