//! The crate's two primitives.
//!
//! - [`Outcome`]: success-or-failure container for errors as values
//! - [`ScopeGuard`]: runs a callable once at scope exit
//!
//! # Examples
//!
//! ```
//! use kirho::{Outcome, ScopeGuard};
//! use std::cell::Cell;
//!
//! let cleaned = Cell::new(false);
//! let parsed: Outcome<u8, String> = {
//!     let _guard = ScopeGuard::new(|| cleaned.set(true));
//!     match "42".parse::<u8>() {
//!         Ok(value) => Outcome::success(value),
//!         Err(err) => Outcome::error(err.to_string()),
//!     }
//! };
//!
//! assert!(cleaned.get());
//! assert_eq!(parsed.to_optional(), Some(42));
//! ```

pub mod outcome;
pub mod scope_guard;

pub use outcome::*;
pub use scope_guard::*;
