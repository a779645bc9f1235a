//! Social share links for an article.

use leptos::prelude::*;
use news::Article;
use news::share::ShareLinks;

#[component]
pub fn ShareBar(article: &'static Article) -> impl IntoView {
    let links = ShareLinks::for_article(article);
    let items = links
        .entries()
        .into_iter()
        .map(|(platform, href)| {
            let new_tab = platform.opens_new_tab();
            view! {
                <a
                    class=format!("share-bar__link share-bar__link--{}", platform.key())
                    href=href.to_owned()
                    target=new_tab.then_some("_blank")
                    rel=new_tab.then_some("noopener noreferrer")
                    aria-label=platform.action_label()
                >
                    {platform.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class="share-bar" aria-label="Share this article">
            <span class="share-bar__label">"Share"</span>
            {items}
        </aside>
    }
}
