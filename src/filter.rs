//! Filter/sort pipeline for the catalog grid

use crate::catalog::collate;
use crate::models::{CatalogItem, NavSection, SortMode, ViewState};

/// Whether `item` passes every active filter in `state`.
///
/// `query` must already be trimmed and lowercased.
fn matches(
    item: &CatalogItem,
    state: &ViewState,
    query: &str,
    is_favorite: &impl Fn(&str) -> bool,
) -> bool {
    if item.year < state.year_min || item.year > state.year_max {
        return false;
    }

    if !state.genres.iter().all(|g| item.has_genre(g)) {
        return false;
    }

    if !query.is_empty() {
        let haystack = format!("{} {}", item.title, item.original_title).to_lowercase();
        if !haystack.contains(query) {
            return false;
        }
    }

    if state.nav == NavSection::MyList && !is_favorite(item.id) {
        return false;
    }

    true
}

/// Order items in place. The sort is stable, so ties keep their input order.
pub fn sort_items(items: &mut [&CatalogItem], sort: SortMode) {
    match sort {
        SortMode::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::Year => items.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::Title => items.sort_by(|a, b| collate(a.title, b.title)),
        SortMode::Trending => items.sort_by(|a, b| b.trend_score.cmp(&a.trend_score)),
    }
}

/// Items matching `state`, in the order selected by `state.sort`.
pub fn apply_filters<'a>(
    items: &'a [CatalogItem],
    state: &ViewState,
    is_favorite: impl Fn(&str) -> bool,
) -> Vec<&'a CatalogItem> {
    let query = state.query.trim().to_lowercase();

    let mut list: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| matches(item, state, &query, &is_favorite))
        .collect();

    sort_items(&mut list, state.sort);
    list
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
