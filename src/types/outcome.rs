use crate::fatal;
use crate::traits::{ErrorHandler, Labels};

/// Message written by [`Outcome::unwrap`] before terminating the process.
pub const UNWRAP_ON_FAILURE: &str = "Outcome::unwrap called on a failure value";

/// A fallible operation's result, carried as a value.
///
/// `Outcome<T, E>` is either a success holding a payload of type `T` or a
/// failure holding an error payload of type `E`. Exactly one variant is
/// populated, and which one is active never depends on the payload, so
/// `T` and `E` may be the same type.
///
/// The type is deliberately move-only: it implements neither `Copy` nor
/// `Clone`. Every consuming accessor takes `self`, so the payload leaves the
/// outcome exactly once and a consumed outcome cannot be inspected again.
/// The borrowing accessors ([`clone_success_into`](Self::clone_success_into),
/// [`clone_error_into`](Self::clone_error_into), [`as_ref`](Self::as_ref))
/// duplicate or borrow the payload instead.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The error payload type
///
/// # Variants
///
/// * `Success(T)` - Contains the success payload
/// * `Failure(E)` - Contains the error payload
///
/// # Examples
///
/// ```
/// use kirho::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(42);
/// assert!(ok.is_success());
///
/// let failed = Outcome::<i32, &str>::error("boom");
/// assert!(failed.is_error());
/// ```
#[must_use = "an outcome may be a failure, which should be handled"]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success payload to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(16);
    /// assert_eq!(o.to_optional(), Some(16));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure outcome.
    ///
    /// # Arguments
    ///
    /// * `error` - The error payload to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::error("missing field");
    /// assert!(o.is_error());
    /// ```
    #[inline]
    pub fn error(error: E) -> Self {
        Self::Failure(error)
    }

    /// Creates an outcome from an `Option`, using `error` when it is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let found = Outcome::from_option(Some(3), "absent");
    /// assert_eq!(found, Outcome::Success(3));
    ///
    /// let absent = Outcome::from_option(None::<i32>, "absent");
    /// assert_eq!(absent, Outcome::Failure("absent"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error),
        }
    }

    /// Returns `true` if the outcome holds a success payload.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds an error payload.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Copies the success payload into `slot` if there is one.
    ///
    /// Returns `true` and overwrites `slot` with a clone of the payload when
    /// the outcome is a success. Returns `false` and leaves `slot` untouched
    /// when it is a failure. The outcome itself is not consumed.
    ///
    /// # Arguments
    ///
    /// * `slot` - Destination for the duplicated payload
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let mut value = 0;
    /// assert!(Outcome::<i32, &str>::success(7).clone_success_into(&mut value));
    /// assert_eq!(value, 7);
    ///
    /// assert!(!Outcome::<i32, &str>::error("e").clone_success_into(&mut value));
    /// assert_eq!(value, 7);
    /// ```
    #[must_use]
    #[inline]
    pub fn clone_success_into(&self, slot: &mut T) -> bool
    where
        T: Clone,
    {
        match self {
            Self::Success(value) => {
                slot.clone_from(value);
                true
            }
            Self::Failure(_) => false,
        }
    }

    /// Copies the error payload into `slot` if there is one.
    ///
    /// Returns `true` exactly when a failure is present, in which case `slot`
    /// is overwritten with a clone of the error. On success returns `false`
    /// and leaves `slot` untouched. The outcome itself is not consumed.
    ///
    /// # Arguments
    ///
    /// * `slot` - Destination for the duplicated error
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let mut error = "";
    /// assert!(Outcome::<i32, &str>::error("timeout").clone_error_into(&mut error));
    /// assert_eq!(error, "timeout");
    ///
    /// assert!(!Outcome::<i32, &str>::success(1).clone_error_into(&mut error));
    /// assert_eq!(error, "timeout");
    /// ```
    #[must_use]
    #[inline]
    pub fn clone_error_into(&self, slot: &mut E) -> bool
    where
        E: Clone,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => {
                slot.clone_from(error);
                true
            }
        }
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Mutably borrows both payloads, producing an `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into an `Option`, discarding the error.
    ///
    /// Intended for call sites that only care whether a value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, i32>::success(420).to_optional(), Some(420));
    /// assert_eq!(Outcome::<i32, i32>::error(666).to_optional(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn to_optional(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error, if any, discarding a success payload.
    #[must_use]
    #[inline]
    pub fn error_value(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Maps the success payload, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the error payload, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let o = Outcome::<i32, u16>::error(404).map_error(|code| format!("HTTP {code}"));
    /// assert_eq!(o, Outcome::Failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `f` runs only when the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// fn halve(x: i32) -> Outcome<i32, &'static str> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::error("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(halve), Outcome::Success(4));
    /// assert_eq!(Outcome::success(3).and_then(halve), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `op` with the error if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let recovered = Outcome::<i32, &str>::error("cache miss").or_else(|_| Outcome::<i32, ()>::success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Returns the success payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => op(error),
        }
    }

    /// Returns the success payload, or terminates the process with a diagnostic.
    ///
    /// This is an assertion, not error handling: use it where a failure
    /// means a broken program invariant. On failure, `labels` are written to
    /// standard error concatenated with no separator, followed by a newline,
    /// and the process aborts. No panic is raised and no destructor runs.
    ///
    /// # Arguments
    ///
    /// * `labels` - A printable value or a tuple of printable values
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let port = Outcome::<u16, &str>::success(8080).unwrap_or_abort("port must be configured");
    /// assert_eq!(port, 8080);
    ///
    /// let id = 7;
    /// let name = Outcome::<&str, ()>::success("root").unwrap_or_abort(("user ", id, " has no name"));
    /// assert_eq!(name, "root");
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap_or_abort<L>(self, labels: L) -> T
    where
        L: Labels,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fatal::abort_with(&labels),
        }
    }

    /// Returns the success payload, or terminates the process.
    ///
    /// Same as [`unwrap_or_abort`](Self::unwrap_or_abort) with the fixed
    /// message [`UNWRAP_ON_FAILURE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, i32>::success(420).unwrap(), 420);
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fatal::abort_with(&UNWRAP_ON_FAILURE),
        }
    }

    /// Invokes `handler` with the error payload if the outcome is a failure.
    ///
    /// On success nothing happens and the payload is dropped. This is the
    /// non-terminating way to react to a failure without extracting it.
    ///
    /// # Arguments
    ///
    /// * `handler` - Any `FnOnce(E)` callable; its parameter type is inferred
    ///   from `E`, so closures need no annotation
    ///
    /// # Examples
    ///
    /// ```
    /// use kirho::Outcome;
    ///
    /// let mut is_error = false;
    /// Outcome::<i32, &str>::error("You failed").handle_error(|_| is_error = true);
    /// assert!(is_error);
    ///
    /// let mut is_error = false;
    /// Outcome::<i32, &str>::success(16).handle_error(|_| is_error = true);
    /// assert!(!is_error);
    ///
    /// let mut shouted = String::new();
    /// Outcome::<i32, &str>::error("boom").handle_error(|e| shouted = e.to_uppercase());
    /// assert_eq!(shouted, "BOOM");
    /// ```
    #[inline]
    pub fn handle_error<H>(self, handler: H)
    where
        H: ErrorHandler<E> + FnOnce(E),
    {
        if let Self::Failure(error) = self {
            handler.handle(error);
        }
    }

    /// Converts into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}
