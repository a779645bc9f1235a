use super::*;
use crate::catalog::{all, find_by_slug};

#[test]
fn document_title_has_brand_suffix() {
    let article = find_by_slug("brightline-opens-european-headquarters").unwrap();
    assert_eq!(
        document_title(article),
        "Brightline Opens European Headquarters in Amsterdam | Brightline News"
    );
}

#[test]
fn listing_title_is_brand_news() {
    assert_eq!(listing_title(), "Brightline News");
}

#[test]
fn schema_carries_required_news_article_fields() {
    let article = &all()[0];
    let value: serde_json::Value = serde_json::to_value(NewsArticleSchema::for_article(article)).unwrap();

    assert_eq!(value["@context"], "https://schema.org");
    assert_eq!(value["@type"], "NewsArticle");
    assert_eq!(value["headline"], article.title);
    assert_eq!(value["description"], article.excerpt);
    assert_eq!(value["image"], "https://www.brightline.example/images/news/fleet-insights.jpg");
    assert_eq!(value["datePublished"], "2025-05-20");
    assert_eq!(value["publisher"]["@type"], "Organization");
    assert_eq!(value["publisher"]["name"], "Brightline");
    assert_eq!(value["publisher"]["logo"]["@type"], "ImageObject");
    assert_eq!(value["publisher"]["logo"]["url"], "https://www.brightline.example/images/brand/logo.png");
    assert_eq!(value["mainEntityOfPage"]["@type"], "WebPage");
    assert_eq!(
        value["mainEntityOfPage"]["@id"],
        "https://www.brightline.example/news/brightline-launches-fleet-insights"
    );
}

#[test]
fn structured_data_json_parses_back() {
    for article in all() {
        let json = structured_data_json(article).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["headline"], article.title);
    }
}

#[test]
fn escape_for_script_hides_markup_characters() {
    let escaped = escape_for_script(r#"{"headline":"</script><b>R&D</b>"}"#);
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert!(!escaped.contains('&'));
    let value: serde_json::Value = serde_json::from_str(&escaped).unwrap();
    assert_eq!(value["headline"], "</script><b>R&D</b>");
}

#[test]
fn social_meta_uses_absolute_urls() {
    let article = &all()[1];
    let meta = SocialMeta::for_article(article);
    assert_eq!(meta.title, article.title);
    assert_eq!(meta.description, article.excerpt);
    assert!(meta.image.starts_with("https://www.brightline.example/images/"));
    assert_eq!(meta.url, format!("https://www.brightline.example/news/{}", article.slug));
}
