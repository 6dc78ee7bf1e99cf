//! View composition over an in-memory contact collection.
//!
//! # Responsibility
//! - Apply search, group filtering, and name ordering in one pass.
//!
//! # Invariants
//! - Search matches on the name only, case-insensitively; the empty term
//!   matches everything.
//! - Records without a group never match a specific group filter.
//! - Ordering ties between case-variant names are broken by the raw name
//!   so repeated composition stays deterministic.

use crate::model::contact::{Contact, ContactGroup};
use std::cmp::Ordering;

/// Group dimension of a view: everything, or one group only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    /// No group restriction; ungrouped records pass too.
    #[default]
    All,
    /// Only records tagged with exactly this group.
    Only(ContactGroup),
}

/// Direction of the name ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// The three independent knobs a view is derived from.
///
/// The default state (empty term, all groups, ascending) shows the whole
/// collection in name order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Substring matched against names, case-insensitively.
    pub search_term: String,
    pub group: GroupFilter,
    pub sort_order: SortOrder,
}

/// Derives the visible, ordered subset of `contacts` for `state`.
///
/// The input collection is left untouched; callers get owned copies of
/// the matching records.
pub fn compose_view(contacts: &[Contact], state: &ViewState) -> Vec<Contact> {
    let term = state.search_term.to_lowercase();

    let mut visible: Vec<Contact> = contacts
        .iter()
        .filter(|contact| matches_term(contact, &term) && matches_group(contact, state.group))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let by_name = compare_names(&a.name, &b.name);
        match state.sort_order {
            SortOrder::Ascending => by_name,
            SortOrder::Descending => by_name.reverse(),
        }
    });
    visible
}

fn matches_term(contact: &Contact, term: &str) -> bool {
    term.is_empty() || contact.name.to_lowercase().contains(term)
}

fn matches_group(contact: &Contact, filter: GroupFilter) -> bool {
    match filter {
        GroupFilter::All => true,
        GroupFilter::Only(group) => contact.group == Some(group),
    }
}

/// Case-insensitive name comparison with the raw name as tiebreak.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
