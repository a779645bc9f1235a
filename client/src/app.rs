//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{article::ArticlePage, newsroom::NewsroomPage};
use crate::state::newsroom::NewsroomState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the listing filter state (so filters survive a round trip through
/// an article) and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let newsroom = RwSignal::new(NewsroomState::default());
    provide_context(newsroom);

    view! {
        <Stylesheet id="leptos" href="/pkg/newsroom.css"/>
        <Title text=news::seo::listing_title()/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=news::site::NEWS_PATH/> }/>
                <Route path=StaticSegment("news") view=NewsroomPage/>
                <Route path=(StaticSegment("news"), ParamSegment("slug")) view=ArticlePage/>
            </Routes>
        </Router>
    }
}
