//! Module: schema
//! Responsibility: the static column/mimetype catalog of the underlying
//! contacts store, plus the sensitive-column denylist.
//! Does not own: view classification, predicate construction, or any
//! per-request state.
//!
//! Invariants:
//! - The catalog is closed; nothing here is derived from caller input.
//! - `SENSITIVE_COLUMNS` is the single source of truth for sanitization.


///
/// Column names
///
/// Shared across the logical views; a view binds the subset it exposes.
///

pub mod columns {
    /// Primary key of the contacts and data views.
    pub const ROW_ID: &str = "_id";

    /// Owning-contact reference on raw-contact, data, and entity views.
    pub const CONTACT_ID: &str = "contact_id";

    /// Data-row id as exposed by the entity view.
    pub const DATA_ID: &str = "data_id";

    /// Attribute type discriminator on data and entity views.
    pub const MIMETYPE: &str = "mimetype";

    /// Group reference carried by group-membership data rows.
    pub const GROUP_ROW_ID: &str = "group_row_id";

    pub const ACCOUNT_NAME: &str = "account_name";
    pub const ACCOUNT_TYPE: &str = "account_type";
    pub const ACCOUNT_TYPE_AND_DATA_SET: &str = "account_type_and_data_set";
    pub const SOURCE_ID: &str = "source_id";
    pub const SYNC1: &str = "sync1";
    pub const SYNC2: &str = "sync2";
    pub const SYNC3: &str = "sync3";
    pub const SYNC4: &str = "sync4";
    pub const PHOTO_ID: &str = "photo_id";
    pub const PHOTO_FILE_ID: &str = "photo_file_id";
    pub const PHOTO_URI: &str = "photo_uri";
    pub const PHOTO_THUMBNAIL_URI: &str = "photo_thumbnail_uri";
}

///
/// Mimetypes
///
/// Attribute type tags stored in the data table's mimetype column.
///

pub mod mime {
    /// Links a raw contact to a group; never exposed through scoped reads.
    pub const GROUP_MEMBERSHIP: &str = "contacts/group-membership";

    /// Photo reference rows; never exposed through scoped reads.
    pub const PHOTO: &str = "contacts/photo";

    /// Structured display-name rows; the only attribute exposed for
    /// contacts reached solely through a granted number or email.
    pub const STRUCTURED_NAME: &str = "contacts/name";
}

///
/// SENSITIVE_COLUMNS
///
/// Columns nulled out of every sanitized row: account identity, sync
/// tokens, and internal photo references.
///

pub const SENSITIVE_COLUMNS: [&str; 12] = [
    columns::ACCOUNT_NAME,
    columns::ACCOUNT_TYPE,
    columns::ACCOUNT_TYPE_AND_DATA_SET,
    columns::SOURCE_ID,
    columns::SYNC1,
    columns::SYNC2,
    columns::SYNC3,
    columns::SYNC4,
    columns::PHOTO_ID,
    columns::PHOTO_FILE_ID,
    columns::PHOTO_URI,
    columns::PHOTO_THUMBNAIL_URI,
];

/// Returns `true` if the named column must never reach a scoped caller.
#[must_use]
pub fn is_sensitive_column(name: &str) -> bool {
    SENSITIVE_COLUMNS.contains(&name)
}
