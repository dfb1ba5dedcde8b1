//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the check-in REST API and the Leptos SSR pages under a single Axum
//! router. The kiosk pages (`/login`, `/`, `/booth`, `/registered`,
//! `/walkin`, `/badge/{queue_id}`) are rendered by the `client` crate and
//! hydrated from `/pkg` assets.

pub mod auth;
pub(crate) mod form;
pub mod queue;
pub mod registered;
pub mod walkins;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// REST API consumed by the kiosk pages.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/queue", get(queue::list_queue))
        .route("/api/queue/mark_printed", post(queue::mark_printed))
        .route("/api/queue/add", post(queue::add_to_queue))
        .route("/api/queue/{queue_id}", get(queue::get_queue_entry))
        .route("/api/registered", get(registered::list_registered))
        .route("/api/registered/import", post(registered::import_roster))
        .route("/api/attendance", post(registered::mark_here))
        .route("/api/walkins", post(walkins::create_walkin))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + Leptos SSR pages + `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
