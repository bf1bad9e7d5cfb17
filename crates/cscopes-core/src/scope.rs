//! Module: scope
//! Responsibility: the caller's granted scope — four categories of allowed
//! identifiers, snapshotted per request from a persisted descriptor.
//! Does not own: grant/revoke management or the descriptor's storage.
//!
//! Invariants:
//! - Identifiers within a category are unique; duplicate input collapses
//!   to single membership.
//! - A snapshot is immutable for the life of the request.
//! - A descriptor that fails to deserialize is the empty scope, never an
//!   error (grant state must not be probeable through parse failures).


use crate::store::RowId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// ScopeCategory
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScopeCategory {
    /// Granted contact groups; expand to their members' contact ids.
    Group,
    /// Directly granted contact ids.
    Contact,
    /// Granted phone-number data rows.
    Number,
    /// Granted email data rows.
    Email,
}

impl ScopeCategory {
    pub const ALL: [Self; 4] = [Self::Group, Self::Contact, Self::Number, Self::Email];
}

///
/// ScopeDescriptor
///
/// Serialized form of a grant. Absent categories default to empty so a
/// descriptor only names what it grants.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ScopeDescriptor {
    #[serde(default)]
    pub groups: Vec<RowId>,
    #[serde(default)]
    pub contacts: Vec<RowId>,
    #[serde(default)]
    pub numbers: Vec<RowId>,
    #[serde(default)]
    pub emails: Vec<RowId>,
}

///
/// ScopeSet
///
/// Immutable per-request snapshot of a caller's grant.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScopeSet {
    groups: BTreeSet<RowId>,
    contacts: BTreeSet<RowId>,
    numbers: BTreeSet<RowId>,
    emails: BTreeSet<RowId>,
}

impl ScopeSet {
    /// Snapshot a scope from its persisted descriptor text.
    ///
    /// Malformed descriptors collapse to the empty scope.
    #[must_use]
    pub fn from_descriptor(descriptor: &str) -> Self {
        serde_json::from_str::<ScopeDescriptor>(descriptor)
            .map(Self::from)
            .unwrap_or_default()
    }

    /// Borrow the granted ids for one category.
    #[must_use]
    pub const fn ids(&self, category: ScopeCategory) -> &BTreeSet<RowId> {
        match category {
            ScopeCategory::Group => &self.groups,
            ScopeCategory::Contact => &self.contacts,
            ScopeCategory::Number => &self.numbers,
            ScopeCategory::Email => &self.emails,
        }
    }

    /// True when no category grants anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ScopeCategory::ALL
            .iter()
            .all(|category| self.ids(*category).is_empty())
    }

    /// Granted data-row ids: numbers and emails, deduplicated.
    #[must_use]
    pub fn data_row_ids(&self) -> Vec<RowId> {
        self.numbers.union(&self.emails).copied().collect()
    }
}

impl From<ScopeDescriptor> for ScopeSet {
    fn from(descriptor: ScopeDescriptor) -> Self {
        Self {
            groups: descriptor.groups.into_iter().collect(),
            contacts: descriptor.contacts.into_iter().collect(),
            numbers: descriptor.numbers.into_iter().collect(),
            emails: descriptor.emails.into_iter().collect(),
        }
    }
}
