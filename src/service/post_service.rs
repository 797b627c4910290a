//! Text post service: list, fetch and create posts in the in-memory store.

use std::sync::Arc;

use crate::domain::{NewTextPost, PostId, PostStore, TextPost};
use crate::error::ApiError;

/// Orchestration layer for text post operations.
///
/// Owns a shared handle to the [`PostStore`]; handlers never touch the
/// store directly.
#[derive(Debug, Clone)]
pub struct PostService {
    store: Arc<PostStore>,
}

impl PostService {
    /// Creates a new `PostService`.
    #[must_use]
    pub fn new(store: Arc<PostStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`PostStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<PostStore> {
        &self.store
    }

    /// Lists posts in insertion order, truncated to `limit` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if `limit` is zero.
    pub async fn list_posts(&self, limit: Option<u64>) -> Result<Vec<TextPost>, ApiError> {
        let limit = match limit {
            Some(0) => {
                return Err(ApiError::InvalidRequest(
                    "limit must be a positive integer".to_string(),
                ));
            }
            Some(n) => Some(usize::try_from(n).unwrap_or(usize::MAX)),
            None => None,
        };
        Ok(self.store.list(limit).await)
    }

    /// Fetches a single post.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PostNotFound`] if the id is unknown.
    pub async fn get_post(&self, id: PostId) -> Result<TextPost, ApiError> {
        self.store.get(id).await
    }

    /// Stores a new post and returns it with its assigned id.
    pub async fn create_post(&self, post: NewTextPost) -> TextPost {
        let created = self.store.insert(post).await;
        tracing::info!(post_id = %created.id, title_len = created.title.len(), "text post created");
        created
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::text_post::seed_posts;

    fn make_service() -> PostService {
        PostService::new(Arc::new(PostStore::with_posts(seed_posts())))
    }

    #[tokio::test]
    async fn create_increments_count_and_is_retrievable() {
        let service = make_service();
        let before = service.store().len().await;

        let created = service
            .create_post(NewTextPost::new("Hello", "World"))
            .await;
        assert_eq!(service.store().len().await, before + 1);

        let Ok(fetched) = service.get_post(created.id).await else {
            panic!("created post should be retrievable");
        };
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.content, "World");
    }

    #[tokio::test]
    async fn zero_limit_is_rejected() {
        let service = make_service();
        assert!(matches!(
            service.list_posts(Some(0)).await,
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn limit_three_of_ten() {
        let service = make_service();
        let Ok(posts) = service.list_posts(Some(3)).await else {
            panic!("list failed");
        };
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First Post", "Second Post", "Third Post"]);
    }

    #[tokio::test]
    async fn huge_limit_returns_all() {
        let service = make_service();
        let Ok(posts) = service.list_posts(Some(u64::MAX)).await else {
            panic!("list failed");
        };
        assert_eq!(posts.len(), 10);
    }
}
