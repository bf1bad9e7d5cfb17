//! Module: restrict
//! Responsibility: building the restriction predicate for one strategy
//! from the resolved id sets.
//! Does not own: id resolution (resolve), rendering (query::predicate),
//! or the caller-filter merge (query::rewrite).
//!
//! Invariants:
//! - Unsupported strategies build the unconditionally-false predicate;
//!   the engine short-circuits before ever executing one.
//! - A contact reached only through a granted number or email exposes its
//!   structured-name rows and nothing else of its data set.


use crate::{
    query::Predicate,
    resolve::ResolvedIds,
    schema::{columns, mime},
    view::{DATA_VIEW_COLUMNS, ENTITY_VIEW_COLUMNS, RowColumns, Strategy},
};

/// Build the restriction predicate for a strategy.
pub(crate) fn build(strategy: Strategy, resolved: &ResolvedIds) -> Predicate {
    match strategy {
        Strategy::Contact => Predicate::id_in(columns::ROW_ID, resolved.contact_ids()),

        Strategy::RawContact => Predicate::id_in(columns::CONTACT_ID, resolved.contact_ids()),

        Strategy::Data => build_row_restriction(DATA_VIEW_COLUMNS, resolved),
        Strategy::Entity => build_row_restriction(ENTITY_VIEW_COLUMNS, resolved),

        Strategy::Unsupported => Predicate::False,
    }
}

// Three visibility grounds for a data-shaped row, as a disjunction:
//  1. the row itself was individually granted;
//  2. its contact was granted (via group or directly), and the row is not
//     a group-membership or photo row;
//  3. its contact was reached through a granted number/email, and the row
//     is a structured-name row.
fn build_row_restriction(cols: RowColumns, resolved: &ResolvedIds) -> Predicate {
    let granted_rows = Predicate::id_in(cols.row_id, resolved.data_row_ids.iter().copied());

    let mut granted_contacts = resolved.group_contact_ids.clone();
    granted_contacts.extend_from_slice(&resolved.direct_contact_ids);
    let contact_fields = Predicate::and(vec![
        Predicate::id_in(cols.contact_id, granted_contacts),
        Predicate::text_not_in(cols.mimetype, [mime::GROUP_MEMBERSHIP, mime::PHOTO]),
    ]);

    let name_only = Predicate::and(vec![
        Predicate::id_in(cols.contact_id, resolved.data_row_contact_ids.iter().copied()),
        Predicate::text_in(cols.mimetype, [mime::STRUCTURED_NAME]),
    ]);

    Predicate::or(vec![granted_rows, contact_fields, name_only])
}
