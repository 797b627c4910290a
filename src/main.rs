//! postboard server entry point.
//!
//! Creates the media post table, then serves the REST endpoints until
//! Ctrl-C.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use postboard::api;
use postboard::app_state::AppState;
use postboard::config::ServerConfig;
use postboard::domain::PostStore;
use postboard::domain::text_post::seed_posts;
use postboard::persistence::SqlitePersistence;
use postboard::service::{FeedService, PostService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid LISTEN_ADDR")?;
    tracing::info!(addr = %config.listen_addr, "starting postboard");

    // Persistence
    let persistence = SqlitePersistence::connect(&config)
        .await
        .context("failed to open database")?;
    persistence
        .create_tables()
        .await
        .context("failed to create tables")?;

    // In-memory text posts
    let store = if config.seed_text_posts {
        PostStore::with_posts(seed_posts())
    } else {
        PostStore::new()
    };

    let app_state = AppState {
        post_service: Arc::new(PostService::new(Arc::new(store))),
        feed_service: Arc::new(FeedService::new(persistence)),
    };

    let app = api::build_app(app_state, config.upload_max_bytes);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
