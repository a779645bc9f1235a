//! Search input bound to the listing state.

use leptos::prelude::*;

use crate::state::newsroom::NewsroomState;

/// Free-text search over titles and excerpts. Filters on every keystroke.
#[component]
pub fn SearchBox() -> impl IntoView {
    let newsroom = expect_context::<RwSignal<NewsroomState>>();
    let has_text = move || newsroom.with(|s| !s.search.is_empty());

    view! {
        <div class="search-box" role="search">
            <label class="visually-hidden" for="news-search">"Search news"</label>
            <input
                id="news-search"
                class="search-box__input"
                type="search"
                placeholder="Search press releases"
                autocomplete="off"
                prop:value=move || newsroom.with(|s| s.search.clone())
                on:input=move |ev| newsroom.update(|s| s.set_search(event_target_value(&ev)))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        newsroom.update(|s| s.set_search(String::new()));
                    }
                }
            />
            <Show when=has_text>
                <button
                    type="button"
                    class="search-box__clear"
                    title="Clear search"
                    aria-label="Clear search"
                    on:click=move |_| newsroom.update(|s| s.set_search(String::new()))
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}
