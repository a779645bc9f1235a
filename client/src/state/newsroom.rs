//! Listing page filter state (selected category and search text).
//!
//! DESIGN
//! ======
//! Held in an `RwSignal` provided at the app root. The listing itself is never
//! stored: it is derived from the static catalog on every read, so the state
//! is just the two user inputs.

#[cfg(test)]
#[path = "newsroom_test.rs"]
mod newsroom_test;

use news::query::{self, CategoryFilter, ListingQuery};
use news::{Article, Partition};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsroomState {
    pub category: CategoryFilter,
    pub search: String,
}

impl NewsroomState {
    #[must_use]
    pub fn query(&self) -> ListingQuery {
        ListingQuery { category: self.category, text: self.search.clone() }
    }

    /// Filtered, searched and newest-first records.
    #[must_use]
    pub fn listing(&self) -> Vec<&'static Article> {
        query::listing(news::all(), &self.query())
    }

    /// [`NewsroomState::listing`] split into featured, secondary and rest.
    #[must_use]
    pub fn partitioned(&self) -> Partition<'static> {
        query::partition(&self.listing())
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search(&mut self, text: String) {
        self.search = text;
    }

    /// Reset both the category and the search text.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.query().is_unfiltered()
    }

    /// Line announced above the results, e.g. `2 stories in Product`.
    #[must_use]
    pub fn summary(&self, count: usize) -> String {
        let noun = if count == 1 { "story" } else { "stories" };
        let mut line = format!("{count} {noun}");
        if let CategoryFilter::Only(category) = self.category {
            line.push_str(" in ");
            line.push_str(category.label());
        }
        let text = self.search.trim();
        if !text.is_empty() {
            line.push_str(&format!(" matching \u{201c}{text}\u{201d}"));
        }
        line
    }
}
