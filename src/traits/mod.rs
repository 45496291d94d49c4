//! Capability predicates for the crate's generic entry points.
//!
//! These traits carry no state and no run-time behavior. Each one has a
//! blanket implementation over the std trait it names, so it acts purely as
//! a compile-time admission check:
//!
//! - [`Printable`]: values that can be written to a text sink (`Display`)
//! - [`Labels`]: an ordered list of printable values for a fatal diagnostic
//! - [`Deferable`]: callables invocable with zero arguments (`FnOnce()`)
//! - [`ErrorHandler`]: callables invocable with one error payload (`FnOnce(E)`)
//!
//! # Examples
//!
//! ```
//! use kirho::traits::{Deferable, ErrorHandler, Printable};
//!
//! fn accepts_printable<P: Printable>(_: P) {}
//! fn accepts_deferable<D: Deferable>(_: D) {}
//! fn accepts_handler<H: ErrorHandler<u8>>(_: H) {}
//!
//! accepts_printable("text");
//! accepts_printable(42);
//! accepts_deferable(|| ());
//! accepts_handler(|code: u8| assert!(code > 0));
//! ```

pub mod deferable;
pub mod error_handler;
pub mod printable;

pub use deferable::Deferable;
pub use error_handler::ErrorHandler;
pub use printable::{Concat, Labels, Printable};
