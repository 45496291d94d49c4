//! The crate's single fatal path.
//!
//! [`Outcome::unwrap`](crate::Outcome::unwrap) and
//! [`Outcome::unwrap_or_abort`](crate::Outcome::unwrap_or_abort) route a
//! failure here. The diagnostic is written to standard error as one line
//! and the process is aborted immediately: no panic, no unwinding, no
//! destructors.
//!
//! With the `tracing` feature enabled, the diagnostic is also emitted as an
//! `ERROR` event on the `kirho::fatal` target, together with the caller's
//! source location, before the process goes down.
//!
//! Without the `std` feature there is no standard error stream to write to;
//! the diagnostic becomes the payload of a panic instead, which terminates
//! on the `panic = "abort"` targets `no_std` code runs on.

use crate::traits::Labels;

/// Writes `labels` as one diagnostic line and terminates the process.
///
/// # Examples
///
/// ```no_run
/// use kirho::fatal::abort_with;
///
/// let invariant_holds = false;
/// if !invariant_holds {
///     abort_with(&("ledger out of balance by ", 12, " cents"));
/// }
/// ```
#[cfg(feature = "std")]
#[track_caller]
#[cold]
pub fn abort_with<L>(labels: &L) -> !
where
    L: Labels + ?Sized,
{
    use std::io::Write;

    #[cfg(feature = "tracing")]
    tracing::error!(
        target: "kirho::fatal",
        location = %core::panic::Location::caller(),
        "{}",
        labels.concat()
    );

    let mut stderr = std::io::stderr().lock();
    // A failed write has nowhere left to be reported.
    let _ = writeln!(stderr, "{}", labels.concat());
    let _ = stderr.flush();

    std::process::abort()
}

/// Writes `labels` as one diagnostic line and terminates the process.
#[cfg(not(feature = "std"))]
#[track_caller]
#[cold]
pub fn abort_with<L>(labels: &L) -> !
where
    L: Labels + ?Sized,
{
    panic!("{}", labels.concat())
}
