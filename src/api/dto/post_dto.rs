//! Text post DTOs for list, get and create.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{NewTextPost, TextPost};

/// Request body for `POST /posts`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

impl From<CreatePostRequest> for NewTextPost {
    fn from(req: CreatePostRequest) -> Self {
        Self::new(req.title, req.content)
    }
}

/// A text post as returned by every `/posts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct PostResponse {
    /// Sequential post id.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

impl From<TextPost> for PostResponse {
    fn from(post: TextPost) -> Self {
        Self {
            id: post.id.get(),
            title: post.title,
            content: post.content,
        }
    }
}

/// Query parameters for `GET /posts`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsParams {
    /// Return only the first `limit` posts. Must be at least 1.
    #[param(minimum = 1)]
    pub limit: Option<u64>,
}
