//! Listing operations over the catalog: category filter, text search,
//! newest-first ordering and the featured/secondary/rest split.
//!
//! Every function borrows its input and returns references into it; the
//! catalog itself is never reordered.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::article::{Article, Category};

/// Number of cards shown beside the featured story.
pub const SECONDARY_COUNT: usize = 2;

/// Category selection on the listing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.key(),
        }
    }

    /// Parse a filter from a query-string value. Missing, empty, `all` and
    /// unknown keys all select [`CategoryFilter::All`].
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        key.and_then(Category::from_key).map_or(Self::All, Self::Only)
    }
}

/// Everything the listing page can narrow by.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub category: CategoryFilter,
    pub text: String,
}

impl ListingQuery {
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.text.trim().is_empty()
    }
}

/// Keep records whose category equals the filter; `All` keeps everything.
pub fn filter_by_category<'a, I>(articles: I, filter: CategoryFilter) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles
        .into_iter()
        .filter(|article| filter.matches(article.category))
        .collect()
}

/// Keep records whose title or excerpt contains `text`, ignoring case.
///
/// Surrounding whitespace in `text` is ignored; an empty query keeps
/// everything.
pub fn search<'a, I>(articles: I, text: &str) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return articles.into_iter().collect();
    }
    articles
        .into_iter()
        .filter(|article| article.matches_text(&needle))
        .collect()
}

/// Order by publication date, newest first. Equal dates keep input order.
#[must_use]
pub fn sort_newest_first(mut articles: Vec<&Article>) -> Vec<&Article> {
    articles.sort_by(|a, b| b.published.cmp(&a.published));
    articles
}

/// Category filter, then text search, then newest-first ordering.
#[must_use]
pub fn listing<'a>(articles: &'a [Article], query: &ListingQuery) -> Vec<&'a Article> {
    let by_category = filter_by_category(articles, query.category);
    sort_newest_first(search(by_category, &query.text))
}

/// The `n` most recent records, newest first.
#[must_use]
pub fn most_recent(articles: &[Article], n: usize) -> Vec<&Article> {
    let mut sorted = sort_newest_first(articles.iter().collect());
    sorted.truncate(n);
    sorted
}

/// The `n` most recent records other than the one with `exclude_slug`.
#[must_use]
pub fn more_news<'a>(articles: &'a [Article], exclude_slug: &str, n: usize) -> Vec<&'a Article> {
    let others = articles.iter().filter(|article| article.slug != exclude_slug).collect();
    let mut sorted = sort_newest_first(others);
    sorted.truncate(n);
    sorted
}

/// Record count per category, in [`Category::ALL`] order.
#[must_use]
pub fn category_counts(articles: &[Article]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = articles.iter().filter(|a| a.category == category).count();
            (category, count)
        })
        .collect()
}

/// A sorted listing split into the lead story, the cards beside it and the
/// remaining grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub featured: Option<&'a Article>,
    pub secondary: Vec<&'a Article>,
    pub rest: Vec<&'a Article>,
}

impl Partition<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.featured.is_some()) + self.secondary.len() + self.rest.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_none()
    }
}

/// Split an already sorted listing into featured, secondary and rest.
#[must_use]
pub fn partition<'a>(sorted: &[&'a Article]) -> Partition<'a> {
    let Some((featured, tail)) = sorted.split_first() else {
        return Partition::default();
    };
    let (secondary, rest) = tail.split_at(tail.len().min(SECONDARY_COUNT));
    Partition { featured: Some(*featured), secondary: secondary.to_vec(), rest: rest.to_vec() }
}
