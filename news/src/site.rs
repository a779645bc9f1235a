//! Brand and canonical URL constants.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

pub const BRAND: &str = "Brightline";
/// Canonical origin used for share links, JSON-LD and the sitemap.
pub const BASE_URL: &str = "https://www.brightline.example";
pub const LOGO_PATH: &str = "/images/brand/logo.png";
pub const NEWS_PATH: &str = "/news";
pub const PRESS_EMAIL: &str = "press@brightline.example";
pub const PRESS_PHONE: &str = "+1 (415) 555-0134";

/// Join a site-relative path onto [`BASE_URL`]. Absolute URLs pass through.
#[must_use]
pub fn absolute_url(path: &str) -> String {
    if path.starts_with("https://") || path.starts_with("http://") {
        return path.to_owned();
    }
    let base = BASE_URL.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Site-relative path of an article page.
#[must_use]
pub fn article_path(slug: &str) -> String {
    format!("{NEWS_PATH}/{slug}")
}

/// Canonical URL of an article page.
#[must_use]
pub fn article_url(slug: &str) -> String {
    absolute_url(&article_path(slug))
}
