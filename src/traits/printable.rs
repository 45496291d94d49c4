//! Text-sink capabilities used by the fatal diagnostic path.
//!
//! [`Printable`] marks a single value that can be written to a text sink.
//! [`Labels`] is the variadic form: an ordered list of printable values that
//! [`Outcome::unwrap_or_abort`](crate::Outcome::unwrap_or_abort) writes,
//! concatenated with no separator, before terminating the process.
//!
//! # Examples
//!
//! ```
//! use kirho::traits::Labels;
//!
//! let labels = ("user ", 42, " not found");
//! assert_eq!(labels.concat().to_string(), "user 42 not found");
//! assert_eq!("single".concat().to_string(), "single");
//! ```
use core::fmt;

/// A value that can be written to a text output sink.
///
/// Every `Display` type is printable.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no text representation",
    label = "this value does not implement `Display`",
    note = "implement `core::fmt::Display` for `{Self}` to use it in a diagnostic"
)]
pub trait Printable: fmt::Display {}

impl<T> Printable for T where T: fmt::Display + ?Sized {}

/// An ordered list of [`Printable`] values forming one diagnostic line.
///
/// Implemented for:
///
/// - references to any printable value (`&str`, `&String`, `&T`)
/// - owned `String` and [`fmt::Arguments`] (from `format_args!`)
/// - `()`, which writes nothing
/// - tuples of 1 to 12 printable values, written in order
///
/// A bare owned scalar is not a `Labels` value; pass it as a one-element
/// tuple `(code,)` or by reference `&code`.
///
/// Values without a `Display` implementation are rejected:
///
/// ```compile_fail
/// use kirho::Outcome;
///
/// struct Opaque;
///
/// let _ = Outcome::<u8, ()>::success(1).unwrap_or_abort(("state: ", Opaque));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as diagnostic labels",
    label = "expected a printable value or a tuple of printable values",
    note = "wrap several values in a tuple: `(\"id \", id, \" failed\")`"
)]
pub trait Labels {
    /// Writes every label to `f`, in order, with no separator.
    fn write_labels(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns a `Display` adapter over the concatenated labels.
    #[inline]
    fn concat(&self) -> Concat<'_, Self> {
        Concat(self)
    }
}

/// `Display` adapter produced by [`Labels::concat`].
pub struct Concat<'a, L: ?Sized>(&'a L);

impl<L> fmt::Display for Concat<'_, L>
where
    L: Labels + ?Sized,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_labels(f)
    }
}

impl<L> fmt::Debug for Concat<'_, L>
where
    L: Labels + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        self.0.write_labels(f)?;
        f.write_str("\"")
    }
}

impl<T> Labels for &T
where
    T: Printable + ?Sized,
{
    #[inline]
    fn write_labels(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(*self, f)
    }
}

#[cfg(feature = "std")]
impl Labels for std::string::String {
    #[inline]
    fn write_labels(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Labels for fmt::Arguments<'_> {
    #[inline]
    fn write_labels(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Labels for () {
    #[inline]
    fn write_labels(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

macro_rules! impl_labels_for_tuple {
    ($($label:ident)+) => {
        impl<$($label),+> Labels for ($($label,)+)
        where
            $($label: Printable,)+
        {
            #[allow(non_snake_case)]
            #[inline]
            fn write_labels(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let ($($label,)+) = self;
                $(fmt::Display::fmt($label, f)?;)+
                Ok(())
            }
        }
    };
}

impl_labels_for_tuple!(A);
impl_labels_for_tuple!(A B);
impl_labels_for_tuple!(A B C);
impl_labels_for_tuple!(A B C D);
impl_labels_for_tuple!(A B C D E);
impl_labels_for_tuple!(A B C D E F);
impl_labels_for_tuple!(A B C D E F G);
impl_labels_for_tuple!(A B C D E F G H);
impl_labels_for_tuple!(A B C D E F G H I);
impl_labels_for_tuple!(A B C D E F G H I J);
impl_labels_for_tuple!(A B C D E F G H I J K);
impl_labels_for_tuple!(A B C D E F G H I J K L);
