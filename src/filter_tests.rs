//! Tests for catalog filtering and sorting

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::*;
use crate::catalog::{collate, Catalog};
use crate::models::{NavSection, SortMode, ViewState};

fn no_favorites(_: &str) -> bool {
    false
}

fn ids(list: &[&CatalogItem]) -> Vec<&'static str> {
    list.iter().map(|m| m.id).collect()
}

fn wide_years() -> ViewState {
    ViewState {
        year_min: 1950,
        year_max: 2030,
        ..ViewState::default()
    }
}

#[test]
fn test_query_matches_russian_title() {
    let catalog = Catalog::builtin();
    let state = ViewState {
        query: "матрица".to_string(),
        sort: SortMode::Rating,
        ..wide_years()
    };

    let list = apply_filters(catalog.items(), &state, no_favorites);
    assert_eq!(ids(&list), vec!["matrix"]);
}

#[test]
fn test_query_is_trimmed_and_case_insensitive() {
    let catalog = Catalog::builtin();
    let state = ViewState {
        query: "  THE DARK ".to_string(),
        ..wide_years()
    };

    let list = apply_filters(catalog.items(), &state, no_favorites);
    assert_eq!(ids(&list), vec!["the-dark-knight"]);
}

#[test]
fn test_query_spans_title_and_original() {
    let catalog = Catalog::builtin();
    let state = ViewState {
        query: "начало inception".to_string(),
        ..wide_years()
    };

    let list = apply_filters(catalog.items(), &state, no_favorites);
    assert_eq!(ids(&list), vec!["inception"]);
}

#[test]
fn test_mylist_with_no_favorites_is_empty() {
    let catalog = Catalog::builtin();
    let mut state = wide_years();
    state.nav = NavSection::MyList;

    assert!(apply_filters(catalog.items(), &state, no_favorites).is_empty());

    state.query = "а".to_string();
    state.sort = SortMode::Title;
    assert!(apply_filters(catalog.items(), &state, no_favorites).is_empty());
}

#[test]
fn test_mylist_keeps_only_favorites() {
    let catalog = Catalog::builtin();
    let favorites: BTreeSet<&str> = ["dune", "her"].into_iter().collect();
    let state = ViewState {
        nav: NavSection::MyList,
        ..ViewState::default()
    };

    let list = apply_filters(catalog.items(), &state, |id| favorites.contains(id));
    assert_eq!(ids(&list), vec!["dune", "her"]);
}

#[test]
fn test_other_sections_ignore_favorites() {
    let catalog = Catalog::builtin();
    for nav in [NavSection::Home, NavSection::Movies, NavSection::Series] {
        let state = ViewState { nav, ..wide_years() };
        let list = apply_filters(catalog.items(), &state, no_favorites);
        assert_eq!(list.len(), catalog.items().len());
    }
}

#[test]
fn test_genres_require_every_selected() {
    let catalog = Catalog::builtin();
    let mut state = wide_years();
    state.toggle_genre("Драма");
    state.toggle_genre("Триллер");

    let list = apply_filters(catalog.items(), &state, no_favorites);
    let found = ids(&list);
    assert!(found.contains(&"parasite"));
    assert!(found.contains(&"fight-club"));
    assert!(!found.contains(&"inception"));
    assert!(list
        .iter()
        .all(|m| m.has_genre("Драма") && m.has_genre("Триллер")));
}

#[test]
fn test_default_years_exclude_old_titles() {
    let catalog = Catalog::builtin();
    let list = apply_filters(catalog.items(), &ViewState::default(), no_favorites);

    assert!(!ids(&list).contains(&"the-godfather"));
    assert!(list.iter().all(|m| (1990..=2025).contains(&m.year)));
}

#[test]
fn test_inverted_year_range_matches_nothing() {
    let catalog = Catalog::builtin();
    let mut state = ViewState::default();
    state.set_year_min(2020);
    state.set_year_max(2000);

    assert!(apply_filters(catalog.items(), &state, no_favorites).is_empty());
}

#[test]
fn test_year_range_is_inclusive() {
    let catalog = Catalog::builtin();
    let mut state = ViewState::default();
    state.set_year_min(1994);
    state.set_year_max(1994);
    state.sort = SortMode::Title;

    let list = apply_filters(catalog.items(), &state, no_favorites);
    assert_eq!(ids(&list), vec!["pulp-fiction", "shawshank", "forrest-gump"]);
}

#[test]
fn test_sort_orders() {
    let catalog = Catalog::builtin();

    let by_rating = apply_filters(
        catalog.items(),
        &ViewState { sort: SortMode::Rating, ..wide_years() },
        no_favorites,
    );
    assert!(by_rating.windows(2).all(|w| w[0].rating >= w[1].rating));
    assert_eq!(by_rating[0].id, "the-godfather");

    let by_year = apply_filters(
        catalog.items(),
        &ViewState { sort: SortMode::Year, ..wide_years() },
        no_favorites,
    );
    assert!(by_year.windows(2).all(|w| w[0].year >= w[1].year));
    assert_eq!(by_year[0].id, "oppenheimer");

    let by_title = apply_filters(
        catalog.items(),
        &ViewState { sort: SortMode::Title, ..wide_years() },
        no_favorites,
    );
    assert!(by_title
        .windows(2)
        .all(|w| collate(w[0].title, w[1].title) != Ordering::Greater));
    assert_eq!(by_title[0].id, "blade-runner-2049");

    let by_trend = apply_filters(catalog.items(), &wide_years(), no_favorites);
    assert!(by_trend.windows(2).all(|w| w[0].trend_score >= w[1].trend_score));
    assert_eq!(by_trend[0].id, "inception");
}

#[test]
fn test_trending_ties_keep_catalog_order() {
    let catalog = Catalog::builtin();
    let list = apply_filters(catalog.items(), &wide_years(), no_favorites);
    let found = ids(&list);

    // Both score 92; the dark knight comes first in the catalog
    let knight = found.iter().position(|id| *id == "the-dark-knight").unwrap();
    let king = found.iter().position(|id| *id == "lotr-return-king").unwrap();
    assert_eq!(king, knight + 1);
}

#[test]
fn test_every_result_satisfies_filters() {
    let catalog = Catalog::builtin();
    let favorites: BTreeSet<&str> = ["matrix", "parasite", "dune", "whiplash"].into_iter().collect();
    let queries = ["", "the", "ла", "  Дюна  "];
    let genre_sets: [&[&str]; 3] = [&[], &["Драма"], &["Фантастика", "Приключения"]];

    for query in queries {
        for genres in genre_sets {
            for nav in NavSection::ALL {
                for sort in SortMode::ALL {
                    let mut state = ViewState {
                        query: query.to_string(),
                        sort,
                        nav,
                        ..ViewState::default()
                    };
                    state.set_year_min(1995);
                    for g in genres {
                        state.toggle_genre(g);
                    }

                    let list = apply_filters(catalog.items(), &state, |id| favorites.contains(id));
                    let needle = query.trim().to_lowercase();
                    for item in list {
                        assert!(item.year >= 1995 && item.year <= 2025);
                        assert!(genres.iter().all(|g| item.has_genre(g)));
                        let hay = format!("{} {}", item.title, item.original_title).to_lowercase();
                        assert!(hay.contains(&needle));
                        if nav == NavSection::MyList {
                            assert!(favorites.contains(item.id));
                        }
                    }
                }
            }
        }
    }
}
