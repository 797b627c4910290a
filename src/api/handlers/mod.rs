//! REST endpoint handlers organized by resource.

pub mod media;
pub mod posts;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
pub fn routes(upload_max_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(posts::routes())
        .merge(media::routes(upload_max_bytes))
        .merge(system::routes())
}
