//! Errors as values and deterministic scope-exit actions.
//!
//! The crate has two independent primitives:
//!
//! - [`Outcome`], a move-only success/failure container with inspection,
//!   handler-dispatch and assert-or-abort accessors.
//! - [`ScopeGuard`] and the [`defer!`] macro, which run a callable exactly
//!   once when the enclosing scope ends.
//!
//! The [`traits`] module holds the capability predicates that gate what
//! those generics accept.
//!
//! # Examples
//!
//! ## Errors as Values
//!
//! ```
//! use kirho::Outcome;
//!
//! fn get_number(number: i32) -> Outcome<i32, i32> {
//!     if number == 69 {
//!         Outcome::success(420)
//!     } else {
//!         Outcome::error(666)
//!     }
//! }
//!
//! assert_eq!(get_number(69).unwrap_or_abort("number lookup failed"), 420);
//! assert_eq!(get_number(1).to_optional(), None);
//! ```
//!
//! ## Reacting to Failure
//!
//! ```
//! use kirho::Outcome;
//!
//! let mut failed = false;
//! Outcome::<i32, &str>::error("boom").handle_error(|_| failed = true);
//! assert!(failed);
//! ```
//!
//! ## Scope Guards
//!
//! ```
//! use kirho::defer;
//! use std::cell::RefCell;
//!
//! let log = RefCell::new(Vec::new());
//! {
//!     defer! { log.borrow_mut().push("outer"); }
//!     defer! { log.borrow_mut().push("inner"); }
//!     log.borrow_mut().push("body");
//! }
//! assert_eq!(*log.borrow(), ["body", "inner", "outer"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

/// Conversions between Outcome, Result, and Option
pub mod convert;
/// Process termination path shared by the unwrap accessors
pub mod fatal;
/// Scope-guard and propagation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability predicates for generic arguments
pub mod traits;
/// Outcome and ScopeGuard
pub mod types;

pub use convert::*;
pub use traits::{Deferable, ErrorHandler, Labels, Printable};
pub use types::{Outcome, ScopeGuard};
