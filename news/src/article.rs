//! Article record, category labels and the lookup error.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Average adult reading speed used for the "N min read" estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Error returned by catalog lookups and slug validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsError {
    /// No record carries the requested slug.
    #[error("no article with slug `{0}`")]
    NotFound(String),
    /// The slug is not lowercase kebab-case ASCII.
    #[error("invalid slug `{0}`: must be lowercase kebab-case")]
    InvalidSlug(String),
}

/// One of the four fixed newsroom categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Announcements,
    Product,
    Partnerships,
    PressCoverage,
}

impl Category {
    /// Every category, in the order the filter bar shows them.
    pub const ALL: [Category; 4] = [Self::Announcements, Self::Product, Self::Partnerships, Self::PressCoverage];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Announcements => "Announcements",
            Self::Product => "Product",
            Self::Partnerships => "Partnerships",
            Self::PressCoverage => "Press Coverage",
        }
    }

    /// URL-safe key used in query strings and CSS modifiers.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Announcements => "announcements",
            Self::Product => "product",
            Self::Partnerships => "partnerships",
            Self::PressCoverage => "press-coverage",
        }
    }

    /// Parse a category from its [`Category::key`]. Matching ignores ASCII case.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single press release.
///
/// Records are authored as literals in [`crate::catalog`]; `body` holds the
/// article markup as Markdown and is rendered by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    /// Unique, URL-safe lookup key.
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub body: &'static str,
    pub category: Category,
    /// Site-relative image path.
    pub image: &'static str,
    pub published: Date,
    /// Outlet name when the record summarizes third-party coverage.
    pub source: Option<&'static str>,
}

impl Article {
    /// Publication date as shown to readers, e.g. `March 4, 2025`.
    #[must_use]
    pub fn published_display(&self) -> String {
        self.published
            .format(format_description!("[month repr:long] [day padding:none], [year]"))
            .unwrap_or_else(|_| self.published.to_string())
    }

    /// Publication date in ISO 8601 calendar form, e.g. `2025-03-04`.
    #[must_use]
    pub fn published_iso(&self) -> String {
        self.published
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| self.published.to_string())
    }

    /// Estimated reading time in whole minutes, never less than one.
    #[must_use]
    pub fn reading_minutes(&self) -> u32 {
        let words = self.body.split_whitespace().count();
        u32::try_from(words.div_ceil(WORDS_PER_MINUTE))
            .unwrap_or(u32::MAX)
            .max(1)
    }

    /// Whether the title or excerpt contains `needle`.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.excerpt.to_lowercase().contains(needle)
    }
}

/// Check that `slug` is non-empty lowercase kebab-case ASCII.
///
/// # Errors
///
/// Returns [`NewsError::InvalidSlug`] when the slug has uppercase letters,
/// characters outside `[a-z0-9-]`, leading/trailing hyphens or `--`.
pub fn validate_slug(slug: &str) -> Result<(), NewsError> {
    let valid = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid { Ok(()) } else { Err(NewsError::InvalidSlug(slug.to_owned())) }
}
