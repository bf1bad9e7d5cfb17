//! Module: view
//! Responsibility: the closed catalog of logical view targets and their
//! classification into restriction strategies.
//! Does not own: column catalogs (schema) or predicate construction
//! (restrict).
//!
//! Invariants:
//! - Every supported view name parses to exactly one `ViewTarget`.
//! - Classification is a total, static table; anything outside the
//!   supported buckets is `Unsupported` and must never reach the
//!   restriction builder.


use crate::schema::columns;
use derive_more::Display;

///
/// ViewTarget
///
/// A logical projection of the contacts schema that a read query can
/// target. Parsed from the request's view name; unknown names do not
/// parse.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ViewTarget {
    #[display("contacts")]
    Contacts,
    #[display("contacts_filter")]
    ContactsFilter,
    #[display("raw_contacts")]
    RawContacts,
    #[display("data")]
    Data,
    #[display("phones")]
    Phones,
    #[display("callables")]
    Callables,
    #[display("emails")]
    Emails,
    #[display("contactables")]
    Contactables,
    #[display("postals")]
    Postals,
    #[display("contact_entities")]
    ContactEntities,
    #[display("raw_contact_entities")]
    RawContactEntities,
    #[display("groups")]
    Groups,
}

impl ViewTarget {
    /// Parse a request view name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let target = match name {
            "contacts" => Self::Contacts,
            "contacts_filter" => Self::ContactsFilter,
            "raw_contacts" => Self::RawContacts,
            "data" => Self::Data,
            "phones" => Self::Phones,
            "callables" => Self::Callables,
            "emails" => Self::Emails,
            "contactables" => Self::Contactables,
            "postals" => Self::Postals,
            "contact_entities" => Self::ContactEntities,
            "raw_contact_entities" => Self::RawContactEntities,
            "groups" => Self::Groups,
            _ => return None,
        };

        Some(target)
    }
}

///
/// Strategy
///
/// The restriction strategy a view classifies into. `Data` and `Entity`
/// share structure and differ only in bound column names.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    Contact,
    RawContact,
    Data,
    Entity,
    Unsupported,
}

/// Classify a view target into its restriction strategy.
#[must_use]
pub const fn classify(view: ViewTarget) -> Strategy {
    match view {
        ViewTarget::Contacts | ViewTarget::ContactsFilter => Strategy::Contact,

        ViewTarget::RawContacts => Strategy::RawContact,

        ViewTarget::Data
        | ViewTarget::Phones
        | ViewTarget::Callables
        | ViewTarget::Emails
        | ViewTarget::Contactables
        | ViewTarget::Postals => Strategy::Data,

        ViewTarget::ContactEntities | ViewTarget::RawContactEntities => Strategy::Entity,

        ViewTarget::Groups => Strategy::Unsupported,
    }
}

///
/// RowColumns
///
/// Column names a data-shaped strategy binds: the data-row id, the
/// owning-contact reference, and the mimetype discriminator.
///

#[derive(Clone, Copy, Debug)]
pub(crate) struct RowColumns {
    pub row_id: &'static str,
    pub contact_id: &'static str,
    pub mimetype: &'static str,
}

pub(crate) const DATA_VIEW_COLUMNS: RowColumns = RowColumns {
    row_id: columns::ROW_ID,
    contact_id: columns::CONTACT_ID,
    mimetype: columns::MIMETYPE,
};

pub(crate) const ENTITY_VIEW_COLUMNS: RowColumns = RowColumns {
    row_id: columns::DATA_ID,
    contact_id: columns::CONTACT_ID,
    mimetype: columns::MIMETYPE,
};
