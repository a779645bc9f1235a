use super::*;

#[test]
fn renders_headings_lists_and_emphasis() {
    let out = render("## Heading\n\n- one\n- **two**\n");
    assert!(out.contains("<h2>Heading</h2>"));
    assert!(out.contains("<li>one</li>"));
    assert!(out.contains("<strong>two</strong>"));
}

#[test]
fn renders_blockquotes() {
    let out = render("> quoted");
    assert!(out.contains("<blockquote>"));
    assert!(out.contains("quoted"));
}

#[test]
fn drops_raw_html() {
    let out = render("before <script>alert(1)</script> after\n\n<div>block</div>\n");
    assert!(!out.contains("<script>"));
    assert!(!out.contains("<div>"));
    assert!(out.contains("before"));
}

#[test]
fn escapes_text_content() {
    let out = render("R&D < ops");
    assert!(out.contains("R&amp;D &lt; ops"));
}

#[test]
fn every_shipped_body_renders_to_paragraphs() {
    for article in news::all() {
        let out = render(article.body);
        assert!(out.contains("<p>"), "{}", article.slug);
    }
}
