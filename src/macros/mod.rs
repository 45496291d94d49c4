//! Ergonomic macros over [`ScopeGuard`](crate::ScopeGuard) and [`Outcome`](crate::Outcome).
//!
//! - [`macro@crate::defer`] - Binds a block of statements to the end of the
//!   current scope through a uniquely named guard.
//! - [`macro@crate::propagate`] - Unwraps a success payload or returns the
//!   failure from the enclosing function.
//!
//! # Examples
//!
//! ```
//! use kirho::{defer, propagate, Outcome};
//! use std::cell::Cell;
//!
//! fn parse(input: &str, closed: &Cell<bool>) -> Outcome<u32, String> {
//!     defer! { closed.set(true); }
//!     let digits = propagate!(Outcome::from_option(
//!         input.strip_prefix('#'),
//!         format!("missing '#' in {input:?}"),
//!     ));
//!     Outcome::from(digits.parse::<u32>().map_err(|err| err.to_string()))
//! }
//!
//! let closed = Cell::new(false);
//! assert_eq!(parse("#12", &closed), Outcome::Success(12));
//! assert!(closed.get());
//! ```

/// Defers a block of statements until the end of the enclosing scope.
///
/// Expands to a [`ScopeGuard`](crate::ScopeGuard) bound to a hygienic local,
/// so several `defer!` invocations can share a scope without naming
/// anything; they fire in reverse order of declaration. Any value the block
/// produces is discarded. Captured variables are borrowed, not moved.
///
/// # Examples
///
/// ```
/// use kirho::defer;
/// use std::cell::RefCell;
///
/// let steps = RefCell::new(Vec::new());
/// for i in 0..2 {
///     defer! { steps.borrow_mut().push(format!("release {i}")); }
///     steps.borrow_mut().push(format!("acquire {i}"));
/// }
/// assert_eq!(
///     *steps.borrow(),
///     ["acquire 0", "release 0", "acquire 1", "release 1"]
/// );
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::ScopeGuard::new(|| {
            let _ = { $($body)* };
        });
    };
}

/// Extracts the success payload of an [`Outcome`](crate::Outcome), or returns
/// the failure from the enclosing function.
///
/// The error is converted with `From`, so a function returning
/// `Outcome<T, G>` can propagate an `Outcome<U, E>` whenever `G: From<E>`.
/// This is an explicit early `return`, nothing more.
///
/// # Examples
///
/// ```
/// use kirho::{propagate, Outcome};
///
/// fn first_even(values: &[i32]) -> Outcome<i32, &'static str> {
///     Outcome::from_option(values.iter().copied().find(|v| v % 2 == 0), "no even value")
/// }
///
/// fn doubled_first_even(values: &[i32]) -> Outcome<i32, String> {
///     let even = propagate!(first_even(values));
///     Outcome::success(even * 2)
/// }
///
/// assert_eq!(doubled_first_even(&[1, 4]), Outcome::Success(8));
/// assert_eq!(doubled_first_even(&[1, 3]), Outcome::Failure("no even value".to_string()));
/// ```
#[macro_export]
macro_rules! propagate {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            }
        }
    };
}
