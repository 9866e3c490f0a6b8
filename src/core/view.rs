//! Derived views over the idea collection.
//!
//! Both projections are pure functions of (collection, filter state) and are
//! recomputed on every render; they must stay free of side effects.

use std::collections::BTreeSet;

use super::idea::Idea;

/// Distinct non-empty categories, sorted ascending.
///
/// The sort is byte-wise (case-sensitive), so "Tech" orders before "diy".
pub fn categories(ideas: &[Idea]) -> Vec<String> {
    let unique: BTreeSet<&str> = ideas
        .iter()
        .map(|idea| idea.category.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    unique.into_iter().map(String::from).collect()
}

/// The sub-sequence of ideas matching a free-text search term and a selected
/// category, preserving collection order.
///
/// The search term matches case-insensitively against title, description, or
/// category; the selected category must match exactly. An empty term or
/// category matches everything. Both predicates must hold.
pub fn filter<'a>(ideas: &'a [Idea], search_term: &str, selected_category: &str) -> Vec<&'a Idea> {
    let needle = search_term.to_lowercase();
    ideas
        .iter()
        .filter(|idea| {
            let matches_search = needle.is_empty()
                || idea.title.to_lowercase().contains(&needle)
                || idea.description.to_lowercase().contains(&needle)
                || idea.category.to_lowercase().contains(&needle);
            let matches_category =
                selected_category.is_empty() || idea.category == selected_category;
            matches_search && matches_category
        })
        .collect()
}
