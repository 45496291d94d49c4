/// A callable that reacts to a failure payload of type `E`.
///
/// Used by [`Outcome::handle_error`](crate::Outcome::handle_error). Any
/// `FnOnce(E)` closure implements it.
///
/// # Examples
///
/// ```
/// use kirho::traits::ErrorHandler;
///
/// let mut seen = None;
/// let handler = |code: i32| seen = Some(code);
/// handler.handle(404);
/// assert_eq!(seen, Some(404));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle an error of type `{E}`",
    label = "expected a callable taking exactly one `{E}`"
)]
pub trait ErrorHandler<E> {
    /// Consumes the handler and passes it the error payload.
    fn handle(self, error: E);
}

impl<E, F> ErrorHandler<E> for F
where
    F: FnOnce(E),
{
    #[inline]
    fn handle(self, error: E) {
        self(error)
    }
}
