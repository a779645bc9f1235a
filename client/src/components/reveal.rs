//! Scroll-linked entrance animation wrapper.
//!
//! DESIGN
//! ======
//! Content is rendered visible. Only after hydration attaches an observer is
//! the wrapper "armed" (hidden by CSS) until it scrolls into view, so a
//! missing observer or a server-only render never hides anything. The
//! observer is owned by the component and disconnected when it unmounts.

use leptos::prelude::*;

/// Fade/slide children in the first time they enter the viewport.
#[component]
pub fn Reveal(children: Children, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let armed = RwSignal::new(false);
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let watch = StoredValue::new_local(None::<crate::util::visibility::VisibilityWatch>);
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if armed.get_untracked() || visible.get_untracked() {
                return;
            }
            match crate::util::visibility::observe_once(&el, move || visible.set(true)) {
                Some(guard) => {
                    watch.set_value(Some(guard));
                    armed.set(true);
                }
                None => visible.set(true),
            }
        });
        // Disconnects the observer of a card that never came into view.
        on_cleanup(move || {
            let _ = watch.try_update_value(Option::take);
        });
    }

    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div
            class="reveal"
            class:reveal--armed=move || armed.get()
            class:reveal--visible=move || visible.get()
            style=style
            node_ref=node
        >
            {children()}
        </div>
    }
}
