//! Media post handlers: upload and feed.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{FeedResponse, MediaPostDto, UploadForm};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `POST /upload` — Record an uploaded file as a media post.
///
/// The `file` part must be present and carry a filename, but its contents
/// are discarded. The optional `caption` part defaults to an empty string.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] if the body is not valid multipart
/// or has no `file` part with a filename, and
/// [`ApiError::PersistenceError`] if the insert fails.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "Feed",
    summary = "Upload a file",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Media post created", body = MediaPostDto),
        (status = 422, description = "Missing file or malformed form", body = ErrorResponse),
    )
)]
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let mut has_file = false;
    let mut caption = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            // Unread fields are drained by the next `next_field` call.
            Some("file") if field.file_name().is_some() => has_file = true,
            Some("caption") => caption = field.text().await?,
            _ => {}
        }
    }

    if !has_file {
        return Err(ApiError::InvalidRequest(
            "missing required file part: file".to_string(),
        ));
    }

    let post = state.feed_service.upload(caption).await?;
    Ok((StatusCode::CREATED, Json(MediaPostDto::from(post))))
}

/// `GET /feed` — All media posts, newest first.
///
/// # Errors
///
/// Returns a [`ApiError`] if the posts cannot be read.
#[utoipa::path(
    get,
    path = "/feed",
    tag = "Feed",
    summary = "Read the feed",
    responses(
        (status = 200, description = "Media posts, newest first", body = FeedResponse),
    )
)]
pub async fn feed(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let posts = state.feed_service.feed().await?;
    Ok(Json(FeedResponse {
        posts: posts.into_iter().map(MediaPostDto::from).collect(),
    }))
}

/// Media routes. `upload_max_bytes` caps the multipart body size.
pub fn routes(upload_max_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload).layer(DefaultBodyLimit::max(upload_max_bytes)),
        )
        .route("/feed", get(feed))
}
