//! Document titles, schema.org structured data and social preview metadata.
//!
//! The client injects these into `<head>` while an article is on screen;
//! `leptos_meta` removes them again when the route changes.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use serde::Serialize;

use crate::article::Article;
use crate::site;

/// `"{title} | {brand} News"`.
#[must_use]
pub fn document_title(article: &Article) -> String {
    format!("{} | {} News", article.title, site::BRAND)
}

/// Title of the listing page.
#[must_use]
pub fn listing_title() -> String {
    format!("{} News", site::BRAND)
}

/// schema.org `NewsArticle` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub image: String,
    pub publisher: Organization,
    pub date_published: String,
    pub main_entity_of_page: WebPage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub logo: ImageObject,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

impl NewsArticleSchema {
    #[must_use]
    pub fn for_article(article: &Article) -> Self {
        Self {
            context: "https://schema.org",
            kind: "NewsArticle",
            headline: article.title.to_owned(),
            description: article.excerpt.to_owned(),
            image: site::absolute_url(article.image),
            publisher: Organization {
                kind: "Organization",
                name: site::BRAND,
                logo: ImageObject { kind: "ImageObject", url: site::absolute_url(site::LOGO_PATH) },
            },
            date_published: article.published_iso(),
            main_entity_of_page: WebPage { kind: "WebPage", id: site::article_url(article.slug) },
        }
    }
}

/// Serialize the article's JSON-LD for embedding in a `<script>` element.
///
/// `<`, `>` and `&` are written as `\u` escapes so the payload can never close
/// the surrounding element and survives HTML text escaping unchanged.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn structured_data_json(article: &Article) -> serde_json::Result<String> {
    let raw = serde_json::to_string(&NewsArticleSchema::for_article(article))?;
    Ok(escape_for_script(&raw))
}

fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            other => out.push(other),
        }
    }
    out
}

/// Open Graph / Twitter card fields for link previews.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialMeta {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

impl SocialMeta {
    #[must_use]
    pub fn for_article(article: &Article) -> Self {
        Self {
            title: article.title.to_owned(),
            description: article.excerpt.to_owned(),
            image: site::absolute_url(article.image),
            url: site::article_url(article.slug),
        }
    }
}
