//! HTTP route handlers.
//!
//! Four fixed routes: the HTML home page, the liveness and readiness probes,
//! and a JSON info endpoint. Any other path falls back to the home page.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;
pub mod info;

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::{middleware, routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, ROUTE_HEALTH, ROUTE_HOME, ROUTE_INFO, ROUTE_READY};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_HOME, get(home::index))
        .route(ROUTE_HEALTH, get(health::health))
        .route(ROUTE_READY, get(health::ready))
        .route(ROUTE_INFO, get(info::info))
        .fallback(home::index)
        .with_state(state)
        // Every response is per-request; never let a proxy or probe see a cached copy
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
