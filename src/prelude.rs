//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use kirho::prelude::*;
//!
//! fn checked_div(a: i32, b: i32) -> Outcome<i32, &'static str> {
//!     if b == 0 {
//!         Outcome::error("division by zero")
//!     } else {
//!         Outcome::success(a / b)
//!     }
//! }
//!
//! assert_eq!(checked_div(8, 2).unwrap_or_abort("divisor is a non-zero constant"), 4);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`defer!`], [`propagate!`]
//! - **Types**: [`Outcome`], [`ScopeGuard`]
//! - **Traits**: [`Labels`], used by `unwrap_or_abort` callers that build label tuples generically

// Macros
pub use crate::{defer, propagate};

// Core types
pub use crate::types::{Outcome, ScopeGuard};

// Traits
pub use crate::traits::Labels;
