//! Module: engine
//! Responsibility: the request pipeline — access check, scope snapshot,
//! classification, resolution, restriction, execution, sanitization, and
//! the optional caller-bound subscription reattach.
//! Does not own: the underlying store, grant persistence, or the
//! presentation of scopes in a settings UI.
//!
//! Invariants:
//! - A caller without the capability flag is rejected outright; no query
//!   logic runs for it.
//! - An empty or malformed scope, and any unsupported view target, yield
//!   a deterministic empty result without touching the store.
//! - The store's absence (`None`) surfaces as absence, never as an error.


use crate::{
    error::ScopeError,
    executor::QueryExecutor,
    query::merge_caller_filter,
    resolve, restrict,
    sanitize::{SanitizedRows, sanitize},
    scope::ScopeSet,
    store::{ChannelId, ContactStore, identity::CallerId},
    view::{Strategy, ViewTarget, classify},
};

///
/// CallerState
///
/// The caller's persisted access record: whether scoped access is enabled
/// for it, and the serialized grant if one exists.
///

#[derive(Clone, Debug, Default)]
pub struct CallerState {
    pub scopes_enabled: bool,
    pub scope_descriptor: Option<String>,
}

///
/// QueryRequest
///
/// One read request against a logical view, as issued by a caller.
///

#[derive(Clone, Debug, Default)]
pub struct QueryRequest {
    pub view: String,
    pub projection: Option<Vec<String>>,
    pub filter: Option<String>,
    pub filter_args: Vec<String>,
    pub sort_order: Option<String>,
}

///
/// ScopedContacts
///
/// The scoped read engine over a contacts store. Holds no per-request
/// state: the scope is re-snapshotted from the caller's record on every
/// request, so a grant change takes effect on the next request.
///

pub struct ScopedContacts<S: ContactStore> {
    store: S,
    service: CallerId,
    notify_channel: Option<ChannelId>,
    debug: bool,
}

impl<S: ContactStore> ScopedContacts<S> {
    #[must_use]
    pub const fn new(store: S, service: CallerId) -> Self {
        Self {
            store,
            service,
            notify_channel: None,
            debug: false,
        }
    }

    /// Enable debug logging of rendered predicates.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Deliver live updates to callers over this channel.
    #[must_use]
    pub const fn notify_channel(mut self, channel: ChannelId) -> Self {
        self.notify_channel = Some(channel);
        self
    }

    /// Run one scoped read.
    ///
    /// `Ok(None)` mirrors the store returning no handle; `Ok(Some)` with
    /// zero rows covers empty scopes, unsupported views, and queries that
    /// matched nothing.
    pub fn query(
        &self,
        caller: Option<&CallerState>,
        request: &QueryRequest,
    ) -> Result<Option<SanitizedRows>, ScopeError> {
        let caller = caller
            .filter(|state| state.scopes_enabled)
            .ok_or(ScopeError::AccessDenied)?;

        let scope = caller
            .scope_descriptor
            .as_deref()
            .map(ScopeSet::from_descriptor)
            .unwrap_or_default();

        if scope.is_empty() {
            return Ok(Some(Self::empty_result(request)));
        }

        let Some(view) = ViewTarget::parse(&request.view) else {
            return Ok(Some(Self::empty_result(request)));
        };
        let strategy = classify(view);
        if strategy == Strategy::Unsupported {
            return Ok(Some(Self::empty_result(request)));
        }

        let exec = QueryExecutor::new(&self.store, self.service, self.debug);
        let resolved = resolve::resolve(&scope, &exec);
        let restriction = restrict::build(strategy, &resolved);
        let rendered = merge_caller_filter(restriction, request.filter.as_deref()).render();

        let Some(raw) = exec.execute(
            view,
            request.projection.as_deref(),
            Some(&rendered),
            &request.filter_args,
            request.sort_order.as_deref(),
        ) else {
            return Ok(None);
        };

        let store_topic = raw.subscription.as_ref().map(|sub| sub.topic.clone());
        let mut result = sanitize(&raw);

        if let (Some(topic), Some(channel)) = (store_topic, self.notify_channel) {
            result.attach_subscription(topic, channel);
        }

        Ok(Some(result))
    }

    // Deterministic empty result shaped by the requested projection; the
    // store is never consulted for it.
    fn empty_result(request: &QueryRequest) -> SanitizedRows {
        SanitizedRows::empty(request.projection.clone().unwrap_or_default())
    }
}
