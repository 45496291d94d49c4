//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `Outcome` at a module
//! boundary while the surrounding code keeps using `Result`, or to hand an
//! outcome back to APIs that expect one.
//!
//! # Examples
//!
//! ```
//! use kirho::convert::*;
//! use kirho::Outcome;
//!
//! let outcome = result_to_outcome("7".parse::<u8>());
//! assert!(outcome.is_success());
//!
//! let result: Result<u8, &str> = outcome_to_result(Outcome::error("bad"));
//! assert_eq!(result, Err("bad"));
//! ```

use crate::types::Outcome;

/// Converts a `Result` into an `Outcome`.
///
/// # Returns
///
/// * `Outcome::Success(value)` if the result is `Ok`
/// * `Outcome::Failure(error)` if the result is `Err`
///
/// # Examples
///
/// ```
/// use kirho::{convert::result_to_outcome, Outcome};
///
/// assert_eq!(result_to_outcome(Ok::<i32, &str>(1)), Outcome::Success(1));
/// assert_eq!(result_to_outcome(Err::<i32, &str>("e")), Outcome::Failure("e"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(error),
    }
}

/// Converts an `Outcome` into a `Result`.
///
/// # Examples
///
/// ```
/// use kirho::{convert::outcome_to_result, Outcome};
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(1)), Ok(1));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` into an `Outcome`, computing the error lazily.
///
/// `error` runs only when `option` is `None`.
///
/// # Examples
///
/// ```
/// use kirho::{convert::option_to_outcome, Outcome};
///
/// let missing = option_to_outcome(None::<u32>, || "no value".to_string());
/// assert_eq!(missing, Outcome::Failure("no value".to_string()));
/// ```
#[inline]
pub fn option_to_outcome<T, E, F>(option: Option<T>, error: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error()),
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
