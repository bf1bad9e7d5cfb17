//! Core engine for scoped contacts access: scope snapshots, restriction
//! predicates, elevated query execution, and result sanitization.
//!
//! A caller sees exactly the rows its granted scope entitles it to — a
//! grant is translated into a restriction predicate per logical view,
//! executed against the real store under the service identity, and the
//! result re-emitted through a sanitizing copy that hides account
//! identity, sync state, and photo references.
#![warn(unreachable_pub)]

pub mod engine;
pub mod error;
pub mod query;
pub mod sanitize;
pub mod schema;
pub mod scope;
pub mod store;
pub mod view;

mod executor;
mod resolve;
mod restrict;


///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, or store plumbing are re-exported here.
///

pub mod prelude {
    pub use crate::{
        scope::{ScopeCategory, ScopeSet},
        store::{RowId, Value},
        view::{Strategy, ViewTarget},
    };
}
