//! Module: sanitize
//! Responsibility: turning a raw store result into a disconnected,
//! caller-safe result — sensitive columns nulled, the store's live
//! notification channel stripped.
//! Does not own: which columns are sensitive (schema) or the decision to
//! reattach a caller-facing subscription (engine).
//!
//! Invariants:
//! - Every permitted cell copies with its kind preserved.
//! - A sanitized result never carries the store's subscription; the only
//!   subscription it can carry is one deliberately attached afterwards.


use crate::{
    schema::is_sensitive_column,
    store::{ChannelId, Rows, Subscription, Value},
};
use derive_more::Deref;

///
/// SanitizedRows
///
/// Caller-facing result set: a defensive copy of the raw rows with the
/// denylist applied. Dereferences to the row slice.
///

#[derive(Clone, Debug, Default, Deref)]
pub struct SanitizedRows {
    pub columns: Vec<String>,

    #[deref]
    pub rows: Vec<Vec<Value>>,

    /// Caller-bound subscription, if one was attached at the boundary.
    pub subscription: Option<Subscription>,
}

impl SanitizedRows {
    /// An empty result shaped by the requested projection.
    #[must_use]
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            subscription: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Attach a subscription bound to the given delivery channel.
    ///
    /// This is the only path that puts a subscription on a sanitized
    /// result; the channel must belong to the caller boundary, never to
    /// the store.
    pub fn attach_subscription(&mut self, topic: String, channel: ChannelId) {
        self.subscription = Some(Subscription { topic, channel });
    }
}

/// Copy a raw result into its sanitized form.
#[must_use]
pub fn sanitize(raw: &Rows) -> SanitizedRows {
    let sensitive: Vec<bool> = raw
        .columns
        .iter()
        .map(|name| is_sensitive_column(name))
        .collect();

    let rows = raw
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&sensitive)
                .map(|(value, blocked)| if *blocked { Value::Null } else { value.clone() })
                .collect()
        })
        .collect();

    SanitizedRows {
        columns: raw.columns.clone(),
        rows,
        subscription: None,
    }
}
