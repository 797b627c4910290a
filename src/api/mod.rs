//! REST API layer: route handlers, DTOs, OpenAPI and router composition.
//!
//! Routes are mounted at the root: `/posts`, `/upload`, `/feed`, `/health`.

pub mod dto;
pub mod handlers;
pub mod openapi;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router(upload_max_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(handlers::routes(upload_max_bytes))
        .merge(openapi::routes())
}

/// Builds the servable application: routes, request tracing, permissive
/// CORS and the shared state.
pub fn build_app(state: AppState, upload_max_bytes: usize) -> Router {
    build_router(upload_max_bytes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
