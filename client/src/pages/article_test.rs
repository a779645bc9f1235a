use super::*;

#[test]
fn resolve_finds_every_shipped_slug() {
    for article in news::all() {
        assert_eq!(resolve(Some(article.slug)).map(|a| a.id), Ok(article.id));
    }
}

#[test]
fn resolve_unknown_or_missing_slug_is_not_found() {
    assert_eq!(resolve(Some("nope")), Err(NewsError::NotFound("nope".to_owned())));
    assert_eq!(resolve(None), Err(NewsError::NotFound(String::new())));
}

#[test]
fn head_carries_branded_title_and_structured_data() {
    let article = news::find_by_slug("brightline-partners-with-northgrid-utilities").unwrap();
    let head = ArticleHead::for_article(article);
    assert_eq!(
        head.title,
        "Brightline and Northgrid Utilities Partner on Smart Depot Charging | Brightline News"
    );
    assert_eq!(head.description, article.excerpt);
    let json = head.structured_data.expect("structured data");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["@type"], "NewsArticle");
    assert_eq!(value["datePublished"], "2025-04-08");
}

#[test]
fn head_social_url_is_canonical_article_url() {
    let article = &news::all()[2];
    let head = ArticleHead::for_article(article);
    assert_eq!(head.social.url, news::site::article_url(article.slug));
}

#[test]
fn reading_label_formats_minutes() {
    let article = &news::all()[3];
    assert_eq!(reading_label(article), "1 min read");
}

#[test]
fn more_news_count_fits_remaining_catalog() {
    assert_eq!(MORE_NEWS_COUNT, news::all().len() - 1);
}

// =============================================================
// Server-rendered routes
// =============================================================

#[cfg(feature = "ssr")]
mod rendered {
    use std::sync::{Arc, Mutex};

    use futures::StreamExt as _;
    use leptos::prelude::*;
    use leptos_meta::ServerMetaContext;
    use leptos_router::location::RequestUrl;

    use crate::app::App;

    struct Rendered {
        head: String,
        body: String,
        redirect: Option<String>,
    }

    fn render(path: &str) -> Rendered {
        let _ = any_spawner::Executor::init_futures_executor();
        let redirect = Arc::new(Mutex::new(None::<String>));
        let owner = Owner::new();
        let (body, meta_output) = owner.with(|| {
            let (meta_context, meta_output) = ServerMetaContext::new();
            provide_context(meta_context);
            provide_context(RequestUrl::new(path));
            let sink = Arc::clone(&redirect);
            leptos_router::components::provide_server_redirect(move |to: &str| {
                *sink.lock().unwrap() = Some(to.to_owned());
            });
            (view! { <App/> }.to_html(), meta_output)
        });

        let document = format!("<!DOCTYPE html><html><head></head><body>{body}</body></html>");
        let document = futures::executor::block_on(async move {
            let stream = futures::stream::once(async move { document }).boxed();
            meta_output.inject_meta_context(stream).await.collect::<String>().await
        });
        let head = document.split("</head>").next().unwrap_or_default().to_owned();
        let redirect = redirect.lock().unwrap().clone();
        Rendered { head, body, redirect }
    }

    #[test]
    fn unknown_slug_redirects_to_listing() {
        let page = render("/news/no-such-story");
        assert_eq!(page.redirect.as_deref(), Some(news::site::NEWS_PATH));
        assert!(!page.head.contains("application/ld+json"));
    }

    #[test]
    fn known_slug_puts_title_and_structured_data_in_head() {
        let article = news::find_by_slug("brightline-opens-european-headquarters").unwrap();
        let page = render(&news::site::article_path(article.slug));

        assert_eq!(page.redirect, None);
        assert!(page.head.contains(&format!("<title>{}</title>", news::seo::document_title(article))));
        assert!(page.head.contains("application/ld+json"));
        assert!(page.head.contains("news-article-ld"));
        assert!(page.head.contains("NewsArticle"));
        assert!(page.head.contains(&news::site::article_url(article.slug)));
    }

    #[test]
    fn listing_has_no_structured_data() {
        let page = render(news::site::NEWS_PATH);
        assert_eq!(page.redirect, None);
        assert!(page.head.contains(&format!("<title>{}</title>", news::seo::listing_title())));
        assert!(!page.head.contains("application/ld+json"));
    }

    #[test]
    fn cards_link_to_article_pages() {
        let page = render(news::site::NEWS_PATH);
        assert!(page.body.contains("article-card__link"));
        for article in news::all() {
            let href = format!("href=\"{}\"", news::site::article_path(article.slug));
            assert!(page.body.contains(&href), "{href}");
        }
    }
}
