//! Article detail page with SEO metadata and share links.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/news/:slug` route. The slug is the only lookup key; an
//! unknown slug redirects to the listing. While an article is mounted its
//! document title, social preview tags and schema.org JSON-LD live in
//! `<head>` through `leptos_meta`, which removes them again on navigation.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_params_map;
use news::seo::{self, SocialMeta};
use news::{Article, NewsError, query, site};

use crate::components::article_card::ArticleCard;
use crate::components::article_image::ArticleImage;
use crate::components::contact_strip::ContactStrip;
use crate::components::reveal::Reveal;
use crate::components::share_bar::ShareBar;
use crate::util::markdown;

/// Cards in the "More news" section under an article.
pub const MORE_NEWS_COUNT: usize = 3;

/// Head metadata for one article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ArticleHead {
    pub title: String,
    pub description: &'static str,
    pub social: SocialMeta,
    pub structured_data: Option<String>,
}

impl ArticleHead {
    pub(crate) fn for_article(article: &Article) -> Self {
        Self {
            title: seo::document_title(article),
            description: article.excerpt,
            social: SocialMeta::for_article(article),
            structured_data: seo::structured_data_json(article).ok(),
        }
    }
}

/// Resolve the route's slug parameter to a record.
pub(crate) fn resolve(slug: Option<&str>) -> Result<&'static Article, NewsError> {
    news::find_by_slug(slug.unwrap_or_default())
}

/// `"4 min read"`.
pub(crate) fn reading_label(article: &Article) -> String {
    format!("{} min read", article.reading_minutes())
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug");

    move || match resolve(slug().as_deref()) {
        Ok(article) => view! { <ArticleView article/> }.into_any(),
        Err(err) => {
            leptos::logging::warn!("redirecting to listing: {err}");
            view! { <Redirect path=site::NEWS_PATH/> }.into_any()
        }
    }
}

#[component]
fn ArticleHeadTags(article: &'static Article) -> impl IntoView {
    let ArticleHead { title, description, social, structured_data } = ArticleHead::for_article(article);
    let canonical = social.url.clone();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <Link rel="canonical" href=canonical/>
        <Meta property="og:type" content="article"/>
        <Meta property="og:site_name" content=site::BRAND/>
        <Meta property="og:title" content=social.title.clone()/>
        <Meta property="og:description" content=social.description.clone()/>
        <Meta property="og:image" content=social.image.clone()/>
        <Meta property="og:url" content=social.url/>
        <Meta property="article:published_time" content=article.published_iso()/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=social.title/>
        <Meta name="twitter:description" content=social.description/>
        <Meta name="twitter:image" content=social.image/>
        {structured_data
            .map(|json| {
                view! {
                    <Script id="news-article-ld" type_="application/ld+json">
                        {json}
                    </Script>
                }
            })}
    }
}

#[component]
fn ArticleView(article: &'static Article) -> impl IntoView {
    let body_html = markdown::render(article.body);
    let more = query::more_news(news::all(), article.slug, MORE_NEWS_COUNT)
        .into_iter()
        .map(|other| view! { <ArticleCard article=other/> })
        .collect_view();

    view! {
        <ArticleHeadTags article/>

        <main class="article-page">
            <nav class="article-page__back">
                <A href=site::NEWS_PATH>"← All news"</A>
            </nav>

            <article class="article-page__article">
                <header class="article-page__header">
                    <span class=format!("category-tag category-tag--{}", article.category.key())>
                        {article.category.label()}
                    </span>
                    <h1 class="article-page__title">{article.title}</h1>
                    <p class="article-page__meta">
                        <time datetime=article.published_iso()>{article.published_display()}</time>
                        <span class="article-page__dot" aria-hidden="true">" · "</span>
                        <span>{reading_label(article)}</span>
                    </p>
                    {article
                        .source
                        .map(|source| {
                            view! {
                                <p class="article-page__source">"As featured in " <cite>{source}</cite></p>
                            }
                        })}
                </header>

                <ArticleImage src=article.image alt=article.title class="article-page__image" eager=true/>

                <Reveal>
                    <div class="article-page__body" inner_html=body_html></div>
                </Reveal>

                <ShareBar article/>
            </article>

            <section class="article-page__more" aria-labelledby="more-news-heading">
                <h2 id="more-news-heading">"More news"</h2>
                <div class="story-grid__rest">{more}</div>
            </section>

            <ContactStrip/>
        </main>
    }
}
