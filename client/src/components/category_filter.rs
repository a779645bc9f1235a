//! Category chips for the listing page.

use leptos::prelude::*;
use news::query::{self, CategoryFilter};

use crate::state::newsroom::NewsroomState;

/// "All" plus one chip per category, each with its record count.
#[component]
pub fn CategoryFilterBar() -> impl IntoView {
    let newsroom = expect_context::<RwSignal<NewsroomState>>();

    let total = news::all().len();
    let chips = std::iter::once((CategoryFilter::All, total))
        .chain(
            query::category_counts(news::all())
                .into_iter()
                .map(|(category, count)| (CategoryFilter::Only(category), count)),
        )
        .map(|(filter, count)| {
            let active = move || newsroom.with(|s| s.category == filter);
            let pressed = move || if active() { "true" } else { "false" };
            view! {
                <button
                    type="button"
                    class=format!("filter-chip filter-chip--{}", filter.key())
                    class:filter-chip--active=active
                    aria-pressed=pressed
                    on:click=move |_| newsroom.update(|s| s.select_category(filter))
                >
                    {filter.label()}
                    <span class="filter-chip__count">{count.to_string()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="category-filter" role="group" aria-label="Filter by category">
            {chips}
        </div>
    }
}
