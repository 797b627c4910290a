//! Media post DTOs for upload and feed.
//!
//! Ids are rendered as strings and timestamps as RFC 3339.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::MediaPost;

/// A persisted media post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct MediaPostDto {
    /// Server-generated UUID.
    pub id: String,
    /// Caption, empty when none was given.
    pub caption: String,
    /// Media location.
    pub url: String,
    /// Media type, always `"photo"`.
    pub file_type: String,
    /// Stored file name.
    pub file_name: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<MediaPost> for MediaPostDto {
    fn from(post: MediaPost) -> Self {
        Self {
            id: post.id.to_string(),
            caption: post.caption,
            url: post.url,
            file_type: post.file_type,
            file_name: post.file_name,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

/// Response body for `GET /feed`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedResponse {
    /// Posts, newest first.
    pub posts: Vec<MediaPostDto>,
}

/// Multipart form accepted by `POST /upload` (documentation only).
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    /// The uploaded file. Required; its bytes are not stored.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Optional caption.
    pub caption: Option<String>,
}
