//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/products` JSON contract and stitches it with
//! Leptos SSR rendering under a single Axum router. When the Leptos
//! configuration is unavailable the server still runs the API on its own.

pub mod products;

use std::path::PathBuf;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The `/products` contract plus health check.
///
/// Wrong methods on a known path fall through to `unhandled_route` rather
/// than Axum's default 405, so every off-contract request gets the same
/// error body.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/products",
            get(products::list_products).fallback(products::unhandled_route),
        )
        .route(
            "/products/createProduct",
            post(products::create_product).fallback(products::unhandled_route),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .delete(products::delete_product)
                .fallback(products::unhandled_route),
        )
        .route(
            "/products/{id}/toggle",
            put(products::toggle_product).fallback(products::unhandled_route),
        )
        .route(
            "/products/{id}/components",
            get(products::list_components)
                .post(products::create_component)
                .fallback(products::unhandled_route),
        )
        .route(
            "/products/{id}/components/{component_id}",
            delete(products::delete_component).fallback(products::unhandled_route),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API-only server: the contract routes with a JSON 404 for everything else.
pub fn app(state: AppState) -> Router {
    api_routes(state).fallback(products::unhandled_route)
}

/// Full server: API routes + Leptos SSR pages + hydration assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(site_app(state, conf.leptos_options))
}

/// Router behind [`leptos_app`] for already-loaded Leptos options.
///
/// Paths that match neither a route nor a file under the site root get the
/// JSON `unhandled_route` body, whatever the method.
fn site_app(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS, and CSS bundles produced by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let site_files = ServeDir::new(site_root_path.clone())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(products::unhandled_route.into_service());

    api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(site_files)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
