//! Module: store
//! Responsibility: the seam to the underlying contacts store — the query
//! port, the cell value type, and raw result handles.
//! Does not own: the store's schema (schema), restriction logic, or row
//! sanitization.
//!
//! Invariants:
//! - `query` returning `None` means total failure; a cursor with zero
//!   rows is not a failure.
//! - A raw `Rows` handle may carry the store's live notification channel;
//!   it must never be returned to a caller without passing through the
//!   sanitizer.

pub mod identity;

use crate::view::ViewTarget;
use derive_more::Display;

/// 64-bit row identifier, shared by every logical view.
pub type RowId = i64;

///
/// Value
///
/// A single cell as stored: the store's closed set of column kinds.
/// Sanitized copies preserve the kind of every permitted cell.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Returns `true` for the null cell.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The integer payload, if this cell is an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The text payload, if this cell is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

///
/// ChannelId
///
/// A notification delivery channel. The store owns one internally; the
/// engine owns a separate one for its callers.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub struct ChannelId(pub u64);

///
/// Subscription
///
/// A live-update subscription attached to a result set: a change topic
/// delivered over a specific channel.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subscription {
    pub topic: String,
    pub channel: ChannelId,
}

///
/// Rows
///
/// A raw result handle as returned by the store: column names, row cells
/// in column order, and optionally the store's own live-update
/// subscription.
///

#[derive(Clone, Debug, Default)]
pub struct Rows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub subscription: Option<Subscription>,
}

impl Rows {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

///
/// StoreQuery
///
/// One parameterized tabular read against a logical view. The predicate
/// is textual, in the store's filter language; positional `?` markers
/// bind `predicate_args` in order.
///

#[derive(Clone, Debug)]
pub struct StoreQuery<'a> {
    pub view: ViewTarget,
    pub projection: Option<&'a [String]>,
    pub predicate: Option<&'a str>,
    pub predicate_args: &'a [String],
    pub sort_order: Option<&'a str>,
}

///
/// ContactStore
///
/// The underlying contacts store. Implementations execute the query
/// against the real schema and return a cursor-backed result, or `None`
/// on total failure.
///

pub trait ContactStore {
    fn query(&self, query: &StoreQuery<'_>) -> Option<Rows>;
}

impl<S: ContactStore> ContactStore for &S {
    fn query(&self, query: &StoreQuery<'_>) -> Option<Rows> {
        (*self).query(query)
    }
}
