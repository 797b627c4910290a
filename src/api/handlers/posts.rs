//! Text post handlers: list, get, create.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreatePostRequest, ListPostsParams, PostResponse};
use crate::app_state::AppState;
use crate::domain::PostId;
use crate::error::{ApiError, ErrorResponse};

/// `GET /posts` — List text posts in insertion order.
///
/// Always answers a JSON array of posts, with or without `limit`; each
/// element carries its `id`, so there is no separate id-keyed shape.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] if `limit` is not a positive integer.
#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    summary = "List posts",
    description = "Returns all text posts in creation order, or only the first `limit` of them.",
    params(ListPostsParams),
    responses(
        (status = 200, description = "Posts in creation order", body = Vec<PostResponse>),
        (status = 422, description = "Invalid limit", body = ErrorResponse),
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    params: Result<Query<ListPostsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let posts = state.post_service.list_posts(params.limit).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(body))
}

/// `GET /posts/{id}` — Get a single text post.
///
/// Any integer id is accepted; one that cannot belong to a post (negative,
/// or too large) is simply not found.
///
/// # Errors
///
/// Returns [`ApiError::PostNotFound`] if the post does not exist, and
/// [`ApiError::InvalidRequest`] if the id is not an integer.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "Posts",
    summary = "Get a post",
    params(
        ("id" = i64, Path, description = "Post id"),
    ),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Id is not an integer", body = ErrorResponse),
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw) = id?;
    let id = PostId::from_path_segment(&raw)?.ok_or(ApiError::PostNotFound(raw))?;
    let post = state.post_service.get_post(id).await?;
    Ok(Json(PostResponse::from(post)))
}

/// `POST /posts` — Create a text post.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] if the body is not a JSON object
/// with string `title` and `content` fields.
#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    summary = "Create a post",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 422, description = "Malformed payload", body = ErrorResponse),
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;
    let created = state.post_service.create_post(req.into()).await;
    Ok((StatusCode::CREATED, Json(PostResponse::from(created))))
}

/// Text post routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
}
