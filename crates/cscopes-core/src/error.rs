//! Module: error
//! Responsibility: the caller-visible error surface.
//!
//! Only an authorization failure is reported distinctly. Every failure
//! inside the filtering pipeline degrades toward "show less" — empty or
//! absent results — and is deliberately indistinguishable from a narrow
//! grant, so internal failures cannot be used as an oracle.

use thiserror::Error as ThisError;

///
/// ScopeError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ScopeError {
    #[error("caller is not enrolled for scoped contacts access")]
    AccessDenied,
}
