//! Module: executor
//! Responsibility: the single store round trip — issuing one augmented
//! query with the effective identity elevated to the service for exactly
//! the duration of the call.
//! Does not own: restriction construction, result sanitization, or the
//! access decision.
//!
//! Invariants:
//! - Elevation brackets one synchronous store call; the previous identity
//!   is restored on every exit path.
//! - Absence (`None`) from the store propagates as absence, never as an
//!   error.

use crate::{
    store::{ContactStore, Rows, StoreQuery, identity},
    view::ViewTarget,
};

///
/// QueryExecutor
///
/// Thin execution port over the underlying store. The restriction
/// predicate it forwards is the security boundary; the store's own
/// per-caller checks are bypassed by running as the service identity.
///

pub(crate) struct QueryExecutor<'a, S: ContactStore> {
    store: &'a S,
    service: identity::CallerId,
    debug: bool,
}

impl<'a, S: ContactStore> QueryExecutor<'a, S> {
    #[must_use]
    pub(crate) const fn new(store: &'a S, service: identity::CallerId, debug: bool) -> Self {
        Self {
            store,
            service,
            debug,
        }
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    /// Run one query against the store under the service identity.
    pub(crate) fn execute(
        &self,
        view: ViewTarget,
        projection: Option<&[String]>,
        predicate: Option<&str>,
        predicate_args: &[String],
        sort_order: Option<&str>,
    ) -> Option<Rows> {
        if let Some(predicate) = predicate {
            self.debug_log(format!("query {view} where {predicate}"));
        }

        let query = StoreQuery {
            view,
            projection,
            predicate,
            predicate_args,
            sort_order,
        };

        let result = identity::with_identity(self.service, || self.store.query(&query));

        if result.is_none() {
            self.debug_log(format!("query {view} returned no handle"));
        }

        result
    }
}
