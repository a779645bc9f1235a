//! `sitemap.xml` for search engine crawlers.

use axum::http::header;
use axum::response::IntoResponse;
use news::{Article, query, site};

/// `GET /sitemap.xml`.
pub async fn sitemap() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], render_sitemap(news::all()))
}

/// One `<url>` for the listing (last modified at the newest article) and one
/// per article.
pub fn render_sitemap(articles: &[Article]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    let newest = query::most_recent(articles, 1).first().map(|a| a.published_iso());
    push_url(&mut out, &site::absolute_url(site::NEWS_PATH), newest.as_deref());
    for article in query::sort_newest_first(articles.iter().collect()) {
        push_url(&mut out, &site::article_url(article.slug), Some(&article.published_iso()));
    }

    out.push_str("</urlset>\n");
    out
}

fn push_url(out: &mut String, loc: &str, lastmod: Option<&str>) {
    out.push_str("  <url>\n    <loc>");
    out.push_str(&xml_escape(loc));
    out.push_str("</loc>\n");
    if let Some(lastmod) = lastmod {
        out.push_str("    <lastmod>");
        out.push_str(lastmod);
        out.push_str("</lastmod>\n");
    }
    out.push_str("  </url>\n");
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod tests;
