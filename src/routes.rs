//! Top-level router configuration combining pages, forms and the API.
//!
//! # Route Structure
//!
//! - `GET  /...`          - HTML pages and SEO documents
//! - `POST /contact`      - HTML contact form (rate limited)
//! - `POST /newsletter`   - HTML newsletter form (rate limited)
//! - `/api/*`             - JSON form endpoints (rate limited)
//! - `GET  /health`       - Health check
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on form submissions
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Every route of the site, with the form routers supplied by the caller.
///
/// `forms` provides `POST /contact` and `POST /newsletter`; `api` is nested
/// under `/api`. Passing them in lets [`app_router`] wrap them in rate
/// limiting while tests drive them directly.
pub fn site_routes(forms: Router<AppState>, api: Router<AppState>) -> Router<AppState> {
    Router::new()
        .merge(web::routes::page_routes())
        .merge(forms)
        .nest("/api", api)
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, static_dir: &Path, behind_proxy: bool) -> NormalizePath<Router> {
    let (forms, api) = if behind_proxy {
        (
            web::routes::form_routes().layer(rate_limit::proxy_layer()),
            api::routes::routes().layer(rate_limit::proxy_layer()),
        )
    } else {
        (
            web::routes::form_routes().layer(rate_limit::layer()),
            api::routes::routes().layer(rate_limit::layer()),
        )
    };

    let router = site_routes(forms, api)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
