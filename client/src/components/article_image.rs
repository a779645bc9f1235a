//! Article image with a deferred "loaded" flag for the fade-in.

use leptos::prelude::*;

/// An `<img>` that marks its wrapper loaded once the browser has the pixels.
///
/// The flag is cosmetic: the image is never hidden while it is false.
#[component]
pub fn ArticleImage(
    src: &'static str,
    alt: &'static str,
    #[prop(into)] class: String,
    /// Load immediately instead of lazily (above-the-fold images).
    #[prop(optional)]
    eager: bool,
) -> impl IntoView {
    let loaded = RwSignal::new(false);
    let loading = if eager { "eager" } else { "lazy" };
    let img_ref = NodeRef::<leptos::html::Img>::new();

    // Hydration can finish after the load event already fired.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(img) = img_ref.get() {
            if img.complete() {
                loaded.set(true);
            }
        }
    });

    view! {
        <figure class=format!("article-image {class}") class:article-image--loaded=move || loaded.get()>
            <img
                class="article-image__img"
                src=src
                alt=alt
                loading=loading
                decoding="async"
                node_ref=img_ref
                on:load=move |_| loaded.set(true)
            />
        </figure>
    }
}
