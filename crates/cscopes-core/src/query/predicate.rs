//! Module: predicate
//! Responsibility: the structured boolean filter expression restriction
//! logic composes, and its one-shot rendering into the store's textual
//! filter language.
//! Does not own: which columns and id sets to restrict (restrict) or the
//! caller-filter rewrite (rewrite).
//!
//! Invariants:
//! - Composite nodes render parenthesized, so any rendered predicate is a
//!   closed expression safe to conjoin with arbitrary caller text.
//! - Id lists render sorted and deduplicated.
//! - Text values render quoted with embedded quotes doubled.

use crate::store::RowId;

///
/// Predicate
///
/// Schema-agnostic filter expression. Built per request, rendered once,
/// never cached across requests.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    /// Membership of a key column in a set of row ids.
    IdIn {
        column: &'static str,
        ids: Vec<RowId>,
    },
    /// (Non-)membership of a text column in a closed set of values.
    TextIn {
        column: &'static str,
        values: Vec<String>,
        negated: bool,
    },
    /// Caller-supplied filter text, carried opaque and parenthesized.
    Fragment(String),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[must_use]
    pub fn id_in(column: &'static str, ids: impl IntoIterator<Item = RowId>) -> Self {
        Self::IdIn {
            column,
            ids: ids.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn text_in(column: &'static str, values: impl IntoIterator<Item = &'static str>) -> Self {
        Self::TextIn {
            column,
            values: values.into_iter().map(str::to_string).collect(),
            negated: false,
        }
    }

    #[must_use]
    pub fn text_not_in(
        column: &'static str,
        values: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self::TextIn {
            column,
            values: values.into_iter().map(str::to_string).collect(),
            negated: true,
        }
    }

    #[must_use]
    pub fn fragment(text: impl Into<String>) -> Self {
        Self::Fragment(text.into())
    }

    /// Render into the store's filter language.
    ///
    /// This is the only point where the structured expression becomes
    /// text; restriction logic upstream never concatenates filter strings.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Self::True => out.push('1'),
            Self::False => out.push('0'),

            Self::And(children) => render_composite(out, children, " AND ", '1'),
            Self::Or(children) => render_composite(out, children, " OR ", '0'),

            Self::IdIn { column, ids } => {
                out.push_str(column);
                out.push_str(" IN (");
                render_id_list(out, ids);
                out.push(')');
            }

            Self::TextIn {
                column,
                values,
                negated,
            } => {
                out.push_str(column);
                if *negated {
                    out.push_str(" NOT");
                }
                out.push_str(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    render_text_value(out, value);
                }
                out.push(')');
            }

            Self::Fragment(text) => {
                out.push('(');
                out.push_str(text);
                out.push(')');
            }
        }
    }
}

// Composite nodes always parenthesize; an empty child list renders its
// neutral element so conjunction/disjunction semantics hold.
fn render_composite(out: &mut String, children: &[Predicate], separator: &str, neutral: char) {
    if children.is_empty() {
        out.push(neutral);
        return;
    }

    out.push('(');
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        child.render_into(out);
    }
    out.push(')');
}

// Sort and skip duplicates while writing; duplicate-laden input renders
// identically to its deduplicated form.
fn render_id_list(out: &mut String, ids: &[RowId]) {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();

    let mut prev = None;
    for id in sorted {
        if prev == Some(id) {
            continue;
        }
        if prev.is_some() {
            out.push(',');
        }
        out.push_str(&id.to_string());
        prev = Some(id);
    }
}

// Quote a text value, doubling embedded quotes.
fn render_text_value(out: &mut String, value: &str) {
    out.push('\'');
    for c in value.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
}

///
/// TESTS
///
