//! Newsroom listing page: search, category chips and the story grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/news` route. The listing is derived from the static catalog
//! and the shared `NewsroomState` on every change; nothing is fetched.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use news::{Partition, seo, site};

use crate::components::article_card::{ArticleCard, CardVariant};
use crate::components::category_filter::CategoryFilterBar;
use crate::components::contact_strip::ContactStrip;
use crate::components::search_box::SearchBox;
use crate::state::newsroom::NewsroomState;

const LISTING_DESCRIPTION: &str = "Press releases, announcements and coverage from the Brightline newsroom.";

/// Stagger between cards entering the viewport together.
const CARD_STAGGER_MS: u32 = 80;

#[component]
pub fn NewsroomPage() -> impl IntoView {
    let newsroom = expect_context::<RwSignal<NewsroomState>>();
    let listing = Memo::new(move |_| newsroom.with(NewsroomState::listing));
    let summary = move || newsroom.with(|s| s.summary(listing.with(Vec::len)));

    view! {
        <Title text=seo::listing_title()/>
        <Meta name="description" content=LISTING_DESCRIPTION/>
        <Meta property="og:title" content=seo::listing_title()/>
        <Meta property="og:description" content=LISTING_DESCRIPTION/>
        <Meta property="og:url" content=site::absolute_url(site::NEWS_PATH)/>

        <main class="newsroom">
            <header class="newsroom__hero">
                <p class="newsroom__eyebrow">{site::BRAND} " Newsroom"</p>
                <h1 class="newsroom__title">"News & press"</h1>
                <p class="newsroom__lede">
                    "Product launches, partnerships and company updates, newest first."
                </p>
            </header>

            <section class="newsroom__controls" aria-label="Filter news">
                <SearchBox/>
                <CategoryFilterBar/>
            </section>

            <p class="newsroom__summary" aria-live="polite">{summary}</p>

            <Show
                when=move || listing.with(|l| !l.is_empty())
                fallback=move || view! { <EmptyResults newsroom/> }
            >
                {move || {
                    let sorted = listing.get();
                    let parts = news::query::partition(&sorted);
                    view! { <StoryGrid parts/> }
                }}
            </Show>

            <ContactStrip/>
        </main>
    }
}

/// Featured story, the secondary column beside it and the remaining grid.
#[component]
fn StoryGrid(parts: Partition<'static>) -> impl IntoView {
    let Partition { featured, secondary, rest } = parts;

    let featured = featured.map(|article| view! { <ArticleCard article variant=CardVariant::Featured/> });
    let secondary = secondary
        .into_iter()
        .zip(1u32..)
        .map(|(article, i)| {
            let delay = i * CARD_STAGGER_MS;
            view! { <ArticleCard article variant=CardVariant::Secondary delay_ms=delay/> }
        })
        .collect_view();
    let rest_empty = rest.is_empty();
    let rest = rest
        .into_iter()
        .zip(0u32..)
        .map(|(article, i)| {
            let delay = (i % 3) * CARD_STAGGER_MS;
            view! { <ArticleCard article delay_ms=delay/> }
        })
        .collect_view();

    view! {
        <section class="story-grid">
            <div class="story-grid__lead">
                {featured}
                <div class="story-grid__secondary">{secondary}</div>
            </div>
            <Show when=move || !rest_empty>
                <h2 class="story-grid__heading">"More stories"</h2>
            </Show>
            <div class="story-grid__rest">{rest}</div>
        </section>
    }
}

#[component]
fn EmptyResults(newsroom: RwSignal<NewsroomState>) -> impl IntoView {
    view! {
        <div class="newsroom__empty">
            <p>"No stories match your filters."</p>
            <button type="button" class="btn" on:click=move |_| newsroom.update(NewsroomState::clear)>
                "Clear filters"
            </button>
        </div>
    }
}
