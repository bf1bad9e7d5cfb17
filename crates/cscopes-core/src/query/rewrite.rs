//! Module: rewrite
//! Responsibility: conjoining the caller's own filter onto a restriction
//! predicate, widening the one filter idiom scoped callers cannot be
//! allowed to use as written.
//! Does not own: restriction construction or predicate rendering.
//!
//! Account names are hidden from scoped callers, so a caller filtering on
//! a null account name (the usual "local contacts only" idiom) would
//! silently exclude every synced entry it has been granted. The fragment
//! is widened in place to match rows in any account state; all other
//! caller text passes through byte-identical.

use crate::{query::predicate::Predicate, schema::columns};

/// The caller-filter fragment that gets widened, located as a
/// case-insensitive substring.
const ACCOUNT_ABSENT_FRAGMENT: &str = "account_name is null";

/// Conjoin a caller's filter (if any) onto the restriction predicate.
#[must_use]
pub fn merge_caller_filter(restriction: Predicate, caller_filter: Option<&str>) -> Predicate {
    let mut clauses = vec![restriction];

    if let Some(filter) = caller_filter {
        clauses.push(Predicate::fragment(rewrite_account_absent(filter)));
    }

    Predicate::and(clauses)
}

// Splice " OR account_name IS NOT NULL" directly after the first
// occurrence of the fragment, preserving the caller's surrounding text
// (and the fragment's original casing) unchanged.
fn rewrite_account_absent(filter: &str) -> String {
    let Some(idx) = find_ascii_ci(filter, ACCOUNT_ABSENT_FRAGMENT) else {
        return filter.to_string();
    };

    let splice_at = idx + ACCOUNT_ABSENT_FRAGMENT.len();
    let mut out = String::with_capacity(filter.len() + 40);
    out.push_str(&filter[..splice_at]);
    out.push_str(" OR ");
    out.push_str(columns::ACCOUNT_NAME);
    out.push_str(" IS NOT NULL");
    out.push_str(&filter[splice_at..]);
    out
}

// ASCII case-insensitive substring search. The needle is ASCII, so a
// matched window starts and ends on char boundaries of the haystack.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if haystack.len() < needle.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

///
/// TESTS
///
