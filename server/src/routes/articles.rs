//! JSON news API over the static catalog.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use news::query::{self, CategoryFilter, ListingQuery};
use news::share::ShareLinks;
use news::{Article, Category, NewsError, site};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: Category,
    pub category_label: &'static str,
    pub image: String,
    pub published: String,
    pub url: String,
    pub source: Option<&'static str>,
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            slug: article.slug,
            title: article.title,
            excerpt: article.excerpt,
            category: article.category,
            category_label: article.category.label(),
            image: site::absolute_url(article.image),
            published: article.published_iso(),
            url: site::article_url(article.slug),
            source: article.source,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShareTargets {
    pub x: String,
    pub linkedin: String,
    pub email: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    /// Markdown source.
    pub body: &'static str,
    pub reading_minutes: u32,
    pub share: ShareTargets,
}

impl From<&Article> for ArticleDetail {
    fn from(article: &Article) -> Self {
        let ShareLinks { x, linkedin, email } = ShareLinks::for_article(article);
        Self {
            summary: ArticleSummary::from(article),
            body: article.body,
            reading_minutes: article.reading_minutes(),
            share: ShareTargets { x, linkedin, email },
        }
    }
}

/// `GET /api/news?category=&q=` — listing summaries, newest first.
pub async fn list_news(Query(params): Query<ListParams>) -> Result<Json<Vec<ArticleSummary>>, StatusCode> {
    let category = parse_category(params.category.as_deref())?;
    let listing = ListingQuery { category, text: params.q.unwrap_or_default() };
    let items = query::listing(news::all(), &listing)
        .into_iter()
        .map(ArticleSummary::from)
        .collect();
    Ok(Json(items))
}

/// `GET /api/news/{slug}` — one full record. Malformed slugs are rejected
/// before the lookup.
pub async fn get_news(Path(slug): Path<String>) -> Result<Json<ArticleDetail>, StatusCode> {
    news::validate_slug(&slug).map_err(news_error_to_status)?;
    let article = news::find_by_slug(&slug).map_err(news_error_to_status)?;
    Ok(Json(ArticleDetail::from(article)))
}

/// Strict counterpart of [`CategoryFilter::from_key`]: unknown keys are a
/// client error rather than "all".
fn parse_category(raw: Option<&str>) -> Result<CategoryFilter, StatusCode> {
    match raw.map(str::trim).filter(|key| !key.is_empty()) {
        None => Ok(CategoryFilter::All),
        Some(key) if key.eq_ignore_ascii_case("all") => Ok(CategoryFilter::All),
        Some(key) => Category::from_key(key)
            .map(CategoryFilter::Only)
            .ok_or(StatusCode::BAD_REQUEST),
    }
}

fn news_error_to_status(err: NewsError) -> StatusCode {
    match err {
        NewsError::NotFound(slug) => {
            tracing::debug!(%slug, "article not found");
            StatusCode::NOT_FOUND
        }
        NewsError::InvalidSlug(slug) => {
            tracing::debug!(%slug, "invalid slug");
            StatusCode::BAD_REQUEST
        }
    }
}

#[cfg(test)]
#[path = "articles_test.rs"]
mod tests;
