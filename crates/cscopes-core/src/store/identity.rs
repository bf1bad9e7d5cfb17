//! Module: identity
//! Responsibility: the ambient effective-caller identity and its scoped
//! elevation window.
//! Does not own: the access decision (engine) or the store port.
//!
//! Invariants:
//! - Elevation is installed for exactly one dynamic scope and restored on
//!   every exit path, including unwind.
//! - The elevated identity is never stored in longer-lived state; it is
//!   observable only while the bracketed closure runs.


use derive_more::Display;
use std::cell::Cell;

///
/// CallerId
///
/// An execution identity: the caller a store query is accounted to.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub struct CallerId(pub u64);

thread_local! {
    static EFFECTIVE_IDENTITY: Cell<Option<CallerId>> = const { Cell::new(None) };
}

/// The identity store calls on this thread are currently accounted to.
#[must_use]
pub fn effective_identity() -> Option<CallerId> {
    EFFECTIVE_IDENTITY.with(Cell::get)
}

/// Run a closure with the effective identity elevated to `identity`.
///
/// The previous identity is restored when the closure returns or unwinds.
pub(crate) fn with_identity<T>(identity: CallerId, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<CallerId>);

    impl Drop for Guard {
        fn drop(&mut self) {
            EFFECTIVE_IDENTITY.with(|cell| cell.set(self.0));
        }
    }

    let prev = EFFECTIVE_IDENTITY.with(|cell| cell.replace(Some(identity)));
    let _guard = Guard(prev);

    f()
}
