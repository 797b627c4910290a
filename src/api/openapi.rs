//! OpenAPI document for the REST surface.

use axum::Router;
use utoipa::OpenApi;

use super::dto::{CreatePostRequest, FeedResponse, MediaPostDto, PostResponse, UploadForm};
use super::handlers::{media, posts, system};
use crate::app_state::AppState;
use crate::error::ErrorResponse;

/// Path of the generated OpenAPI JSON.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Aggregated OpenAPI document.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "postboard", description = "Text posts and media feed"),
    paths(
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        media::upload,
        media::feed,
        system::health_handler,
    ),
    components(schemas(
        CreatePostRequest,
        PostResponse,
        MediaPostDto,
        FeedResponse,
        UploadForm,
        ErrorResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "Posts", description = "In-memory text posts"),
        (name = "Feed", description = "Persisted media posts"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON, plus Swagger UI at `/docs` when the
/// `swagger-ui` feature is enabled.
#[cfg(feature = "swagger-ui")]
pub fn routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
    )
}

/// Serves the OpenAPI JSON.
#[cfg(not(feature = "swagger-ui"))]
pub fn routes() -> Router<AppState> {
    use axum::Json;
    use axum::routing::get;

    Router::new().route(OPENAPI_JSON_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}
