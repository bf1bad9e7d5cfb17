//! Module: resolve
//! Responsibility: expanding the scope's indirect categories into concrete
//! id sets — granted groups to their members' contact ids, granted data
//! rows to their owning contact ids.
//! Does not own: predicate construction (restrict) or the store round
//! trip (executor).
//!
//! Invariants:
//! - Sub-queries run sequentially, one round trip each, no retries.
//! - A failed or handle-less sub-query contributes the empty set; an
//!   unreadable expansion must narrow visibility, never widen it.
//! - Every resolved list is deduplicated before restriction building.

use crate::{
    executor::QueryExecutor,
    query::Predicate,
    schema::{columns, mime},
    scope::{ScopeCategory, ScopeSet},
    store::{ContactStore, RowId, Value},
    view::ViewTarget,
};

///
/// ResolvedIds
///
/// Per-request resolution of a scope into the id sets restriction
/// building consumes. Recomputed on every request; a grant change is
/// picked up by the next request with no cache to invalidate.
///

#[derive(Debug, Default)]
pub(crate) struct ResolvedIds {
    /// Contact ids of members of granted groups.
    pub group_contact_ids: Vec<RowId>,

    /// Contact ids owning granted number/email data rows.
    pub data_row_contact_ids: Vec<RowId>,

    /// Directly granted contact ids.
    pub direct_contact_ids: Vec<RowId>,

    /// Granted data-row ids (numbers and emails).
    pub data_row_ids: Vec<RowId>,
}

impl ResolvedIds {
    /// Every contact id the scope grants visibility into, deduplicated.
    pub(crate) fn contact_ids(&self) -> Vec<RowId> {
        let mut ids = Vec::with_capacity(
            self.group_contact_ids.len()
                + self.data_row_contact_ids.len()
                + self.direct_contact_ids.len(),
        );
        ids.extend_from_slice(&self.group_contact_ids);
        ids.extend_from_slice(&self.data_row_contact_ids);
        ids.extend_from_slice(&self.direct_contact_ids);
        dedup(&mut ids);

        ids
    }
}

/// Resolve a scope's indirect categories through the data table.
pub(crate) fn resolve<S: ContactStore>(
    scope: &ScopeSet,
    exec: &QueryExecutor<'_, S>,
) -> ResolvedIds {
    let data_row_ids = scope.data_row_ids();

    ResolvedIds {
        group_contact_ids: group_member_contact_ids(scope, exec),
        data_row_contact_ids: owning_contact_ids(&data_row_ids, exec),
        direct_contact_ids: scope.ids(ScopeCategory::Contact).iter().copied().collect(),
        data_row_ids,
    }
}

// Contact ids of every member of every granted group, via the
// group-membership rows of the data table.
fn group_member_contact_ids<S: ContactStore>(
    scope: &ScopeSet,
    exec: &QueryExecutor<'_, S>,
) -> Vec<RowId> {
    let groups = scope.ids(ScopeCategory::Group);
    if groups.is_empty() {
        return Vec::new();
    }

    let predicate = Predicate::and(vec![
        Predicate::text_in(columns::MIMETYPE, [mime::GROUP_MEMBERSHIP]),
        Predicate::id_in(columns::GROUP_ROW_ID, groups.iter().copied()),
    ]);

    query_contact_ids(exec, &predicate)
}

// Owning contact ids of individually granted data rows.
fn owning_contact_ids<S: ContactStore>(
    data_row_ids: &[RowId],
    exec: &QueryExecutor<'_, S>,
) -> Vec<RowId> {
    if data_row_ids.is_empty() {
        return Vec::new();
    }

    let predicate = Predicate::id_in(columns::ROW_ID, data_row_ids.iter().copied());

    query_contact_ids(exec, &predicate)
}

// One lookup on the data table projecting the owning contact id. A
// missing handle degrades to the empty contribution.
fn query_contact_ids<S: ContactStore>(
    exec: &QueryExecutor<'_, S>,
    predicate: &Predicate,
) -> Vec<RowId> {
    let projection = [columns::CONTACT_ID.to_string()];
    let rendered = predicate.render();

    let Some(result) = exec.execute(
        ViewTarget::Data,
        Some(projection.as_slice()),
        Some(&rendered),
        &[],
        None,
    ) else {
        return Vec::new();
    };

    let mut ids: Vec<RowId> = result
        .rows
        .iter()
        .filter_map(|row| row.first().and_then(Value::as_integer))
        .collect();
    dedup(&mut ids);

    ids
}

fn dedup(ids: &mut Vec<RowId>) {
    ids.sort_unstable();
    ids.dedup();
}
