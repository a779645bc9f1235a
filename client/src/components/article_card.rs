//! Card linking to an article from the listing grid.

use leptos::prelude::*;
use leptos_router::components::A;
use news::{Article, site};

use super::article_image::ArticleImage;
use super::reveal::Reveal;

/// Size of a card in the listing layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// Lead story spanning the top of the grid.
    Featured,
    /// Beside the lead story.
    Secondary,
    #[default]
    Standard,
}

impl CardVariant {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Secondary => "secondary",
            Self::Standard => "standard",
        }
    }

    #[must_use]
    pub fn shows_excerpt(self) -> bool {
        !matches!(self, Self::Secondary)
    }
}

/// A clickable card for one article.
#[component]
pub fn ArticleCard(
    article: &'static Article,
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let href = site::article_path(article.slug);
    let featured = variant == CardVariant::Featured;
    let heading = if featured {
        view! { <h2 class="article-card__title">{article.title}</h2> }.into_any()
    } else {
        view! { <h3 class="article-card__title">{article.title}</h3> }.into_any()
    };

    view! {
        <Reveal delay_ms=delay_ms>
            <article class=format!("article-card article-card--{}", variant.modifier())>
                <A href=href attr:class="article-card__link">
                    <ArticleImage
                        src=article.image
                        alt=article.title
                        class="article-card__image"
                        eager=featured
                    />
                    <div class="article-card__body">
                        <span class=format!("category-tag category-tag--{}", article.category.key())>
                            {article.category.label()}
                        </span>
                        {heading}
                        {variant
                            .shows_excerpt()
                            .then(|| view! { <p class="article-card__excerpt">{article.excerpt}</p> })}
                        <time class="article-card__date" datetime=article.published_iso()>
                            {article.published_display()}
                        </time>
                    </div>
                </A>
            </article>
        </Reveal>
    }
}
