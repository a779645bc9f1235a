//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON news API, the sitemap and the health probe, and
//! stitches them with Leptos SSR rendering under a single Axum router. Static
//! assets are served from the Leptos site root (`/pkg`) and the configured
//! images directory (`/images`).

pub mod articles;
pub mod sitemap;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// API and crawler routes that sit beside the SSR pages.
fn api_routes() -> Router {
    Router::new()
        .route("/api/news", get(articles::list_news))
        .route("/api/news/{slug}", get(articles::get_news))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/healthz", get(healthz))
}

/// Full application: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    tracing::debug!(images = %config.images_dir.display(), site_root = %site_root_path.display(), "static directories");

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/images", ServeDir::new(&config.images_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
