//! Database models for the `posts` table.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::MediaPostId;

/// Placeholder stored in `url` until a real storage backend exists.
pub const PLACEHOLDER_URL: &str = "dummy url";

/// Placeholder stored in `file_name`.
pub const PLACEHOLDER_FILE_NAME: &str = "dummy name";

/// Media type recorded for every upload.
pub const PHOTO_FILE_TYPE: &str = "photo";

/// A stored row from the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaPost {
    /// Server-generated identifier.
    pub id: MediaPostId,
    /// User-supplied caption, empty when omitted.
    pub caption: String,
    /// Location of the media.
    pub url: String,
    /// Media type discriminator.
    pub file_type: String,
    /// Stored file name.
    pub file_name: String,
    /// Server-side insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// Values for a row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMediaPost {
    /// Caption text.
    pub caption: String,
    /// Location of the media.
    pub url: String,
    /// Media type discriminator.
    pub file_type: String,
    /// Stored file name.
    pub file_name: String,
}

impl NewMediaPost {
    /// Builds the row recorded for an upload: placeholder location and
    /// name, `"photo"` type, and the given caption.
    #[must_use]
    pub fn placeholder(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            url: PLACEHOLDER_URL.to_string(),
            file_type: PHOTO_FILE_TYPE.to_string(),
            file_name: PLACEHOLDER_FILE_NAME.to_string(),
        }
    }
}
