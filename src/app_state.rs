//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{FeedService, PostService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// In-memory text posts.
    pub post_service: Arc<PostService>,
    /// Persisted media posts.
    pub feed_service: Arc<FeedService>,
}
