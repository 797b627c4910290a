//! Feed service: record uploads and read the media post feed.

use chrono::Utc;

use crate::error::ApiError;
use crate::persistence::{MediaPost, NewMediaPost, SqlitePersistence};

/// Orchestration layer for persisted media posts.
#[derive(Debug, Clone)]
pub struct FeedService {
    persistence: SqlitePersistence,
}

impl FeedService {
    /// Creates a new `FeedService`.
    #[must_use]
    pub fn new(persistence: SqlitePersistence) -> Self {
        Self { persistence }
    }

    /// Returns a reference to the persistence layer.
    #[must_use]
    pub fn persistence(&self) -> &SqlitePersistence {
        &self.persistence
    }

    /// Records an upload. File contents are not stored: the row carries
    /// placeholder location and name plus the caption.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PersistenceError`] if the insert fails.
    pub async fn upload(&self, caption: String) -> Result<MediaPost, ApiError> {
        let post = self
            .persistence
            .insert_post(NewMediaPost::placeholder(caption), Utc::now())
            .await?;
        tracing::info!(post_id = %post.id, caption_len = post.caption.len(), "media post created");
        Ok(post)
    }

    /// Returns every media post, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`ApiError`] if the posts cannot be read.
    pub async fn feed(&self) -> Result<Vec<MediaPost>, ApiError> {
        self.persistence.list_newest_first().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::models::PHOTO_FILE_TYPE;
    use crate::persistence::sqlite::tests::memory_store;

    #[tokio::test]
    async fn upload_with_caption_is_persisted() {
        let service = FeedService::new(memory_store().await);
        let Ok(first) = service.upload("hello".to_string()).await else {
            panic!("upload failed");
        };
        let Ok(second) = service.upload(String::new()).await else {
            panic!("upload failed");
        };

        assert_eq!(first.caption, "hello");
        assert_eq!(first.file_type, PHOTO_FILE_TYPE);
        assert_eq!(second.caption, "");
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn feed_returns_every_post_newest_first() {
        let service = FeedService::new(memory_store().await);
        let mut uploaded = Vec::new();
        for caption in ["one", "two", "three"] {
            let Ok(post) = service.upload(caption.to_string()).await else {
                panic!("upload failed");
            };
            uploaded.push(post.id);
        }

        let Ok(feed) = service.feed().await else {
            panic!("feed failed");
        };
        uploaded.reverse();
        let ids: Vec<_> = feed.iter().map(|p| p.id).collect();
        assert_eq!(ids, uploaded);
    }

    #[tokio::test]
    async fn empty_feed_is_empty() {
        let service = FeedService::new(memory_store().await);
        assert!(matches!(service.feed().await, Ok(posts) if posts.is_empty()));
    }
}
