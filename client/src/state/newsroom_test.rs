use news::Category;

use super::*;

fn ids(articles: &[&Article]) -> Vec<u32> {
    articles.iter().map(|a| a.id).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_unfiltered() {
    let state = NewsroomState::default();
    assert_eq!(state.category, CategoryFilter::All);
    assert!(state.search.is_empty());
    assert!(!state.is_filtered());
}

#[test]
fn default_listing_is_full_catalog_newest_first() {
    let state = NewsroomState::default();
    assert_eq!(ids(&state.listing()), vec![1, 2, 3, 4]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn select_category_narrows_listing() {
    let mut state = NewsroomState::default();
    state.select_category(CategoryFilter::Only(Category::Product));
    assert!(state.is_filtered());
    assert!(state.listing().iter().all(|a| a.category == Category::Product));
}

#[test]
fn search_narrows_within_category() {
    let mut state = NewsroomState::default();
    state.set_search("Depot".to_owned());
    assert_eq!(ids(&state.listing()), vec![2, 4]);

    state.select_category(CategoryFilter::Only(Category::PressCoverage));
    assert_eq!(ids(&state.listing()), vec![4]);
}

#[test]
fn clear_resets_both_inputs() {
    let mut state = NewsroomState { category: CategoryFilter::Only(Category::Product), search: "zzz".to_owned() };
    assert!(state.listing().is_empty());
    state.clear();
    assert_eq!(state, NewsroomState::default());
    assert_eq!(state.listing().len(), 4);
}

#[test]
fn partitioned_uses_sorted_listing() {
    let parts = NewsroomState::default().partitioned();
    assert_eq!(parts.featured.map(|a| a.id), Some(1));
    assert_eq!(ids(&parts.secondary), vec![2, 3]);
    assert_eq!(ids(&parts.rest), vec![4]);
}

// =============================================================
// Summary line
// =============================================================

#[test]
fn summary_pluralizes() {
    let state = NewsroomState::default();
    assert_eq!(state.summary(4), "4 stories");
    assert_eq!(state.summary(1), "1 story");
    assert_eq!(state.summary(0), "0 stories");
}

#[test]
fn summary_mentions_category_and_search() {
    let state = NewsroomState { category: CategoryFilter::Only(Category::Partnerships), search: " depot ".to_owned() };
    assert_eq!(state.summary(1), "1 story in Partnerships matching \u{201c}depot\u{201d}");
}
