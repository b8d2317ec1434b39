//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the small JSON API with Leptos SSR rendering under a
//! single Axum router. Leptos assets are served from the site root `/pkg`
//! directory; anything else unmatched falls back to the static directory, and
//! paths missing there render the app's not-found page with status 404.

pub mod site;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::handler::Handler;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use client::app::App;
use client::config::SiteConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream_with_context};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// JSON and health endpoints, independent of the Leptos configuration.
pub(crate) fn api_routes(site: Arc<SiteConfig>) -> Router {
    Router::new()
        .route("/api/site", get(site::metadata))
        .route("/healthz", get(healthz))
        .with_state(site)
}

/// Inputs for rendering the app outside the generated route list.
#[derive(Clone)]
struct RenderState {
    options: LeptosOptions,
    site: Arc<SiteConfig>,
}

/// API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded from the
/// `LEPTOS_*` environment.
pub fn app(config: &ServerConfig, site: Arc<SiteConfig>) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list({
        let site = site.clone();
        move || view! { <App config=site.clone()/> }
    });
    tracing::debug!(count = routes.len(), "generated leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let site = site.clone();
            move || client::app::shell(opts.clone(), site.clone())
        })
        .with_state(leptos_options.clone());

    let not_found = not_found_page.with_state(RenderState { options: leptos_options.clone(), site: site.clone() });

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(
        site_root = %site_root_path.display(),
        static_dir = %config.static_dir.display(),
        "serving assets"
    );

    let router = api_routes(site)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&config.static_dir).not_found_service(not_found))
        .layer(TraceLayer::new_for_http());

    if config.compression {
        Ok(router.layer(CompressionLayer::new()))
    } else {
        Ok(router)
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Render the full document for a path no route or static file claims.
///
/// The router's fallback page is chosen by the app itself; `ServeDir` sets
/// the 404 status on the way out.
async fn not_found_page(State(render): State<RenderState>, req: Request<Body>) -> Response {
    let RenderState { options, site } = render;
    tracing::debug!(path = %req.uri().path(), "rendering not-found page");

    let handler = render_app_to_stream_with_context(
        {
            let options = options.clone();
            move || provide_context(options.clone())
        },
        move || client::app::shell(options.clone(), site.clone()),
    );
    handler(req).await.into_response()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
