use super::*;

#[test]
fn sitemap_lists_listing_and_every_article() {
    let xml = render_sitemap(news::all());
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<loc>https://www.brightline.example/news</loc>"));
    for article in news::all() {
        assert!(xml.contains(&format!("<loc>{}</loc>", site::article_url(article.slug))), "{}", article.slug);
    }
    assert_eq!(xml.matches("<url>").count(), news::all().len() + 1);
    assert!(xml.trim_end().ends_with("</urlset>"));
}

#[test]
fn listing_lastmod_is_newest_article_date() {
    let xml = render_sitemap(news::all());
    let first = xml.find("<lastmod>").unwrap();
    assert_eq!(&xml[first + "<lastmod>".len()..first + "<lastmod>".len() + 10], "2025-05-20");
}

#[test]
fn empty_catalog_still_lists_the_listing_page() {
    let xml = render_sitemap(&[]);
    assert_eq!(xml.matches("<url>").count(), 1);
    assert!(!xml.contains("<lastmod>"));
}

#[test]
fn xml_escape_handles_markup_characters() {
    assert_eq!(xml_escape("a&b<c>\"'"), "a&amp;b&lt;c&gt;&quot;&apos;");
}
