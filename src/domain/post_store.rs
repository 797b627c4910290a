//! Owned, synchronized in-memory store for text posts.
//!
//! [`PostStore`] keeps posts in a `BTreeMap` keyed by [`PostId`] behind a
//! [`tokio::sync::RwLock`]. Ids are handed out under the write lock, so
//! concurrent creates never collide, and since ids only grow and posts are
//! never removed, ascending-key iteration is insertion order.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::PostId;
use super::text_post::{NewTextPost, TextPost};
use crate::error::ApiError;

#[derive(Debug)]
struct Inner {
    posts: BTreeMap<PostId, TextPost>,
    next_id: PostId,
}

/// Central store for all text posts.
///
/// # Concurrency
///
/// - Readers (`get`, `list`, `len`) run concurrently.
/// - `insert` takes the write lock, assigns the next id and stores the post
///   in one critical section.
#[derive(Debug)]
pub struct PostStore {
    inner: RwLock<Inner>,
}

impl PostStore {
    /// Creates an empty store. The first inserted post gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                posts: BTreeMap::new(),
                next_id: PostId::FIRST,
            }),
        }
    }

    /// Creates a store pre-populated with `posts`, ids assigned from 1.
    #[must_use]
    pub fn with_posts(posts: impl IntoIterator<Item = NewTextPost>) -> Self {
        let mut map = BTreeMap::new();
        let mut next_id = PostId::FIRST;
        for post in posts {
            map.insert(
                next_id,
                TextPost {
                    id: next_id,
                    title: post.title,
                    content: post.content,
                },
            );
            next_id = next_id.next();
        }
        Self {
            inner: RwLock::new(Inner {
                posts: map,
                next_id,
            }),
        }
    }

    /// Stores a new post under the next free id and returns it.
    pub async fn insert(&self, post: NewTextPost) -> TextPost {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id = id.next();
        let stored = TextPost {
            id,
            title: post.title,
            content: post.content,
        };
        inner.posts.insert(id, stored.clone());
        stored
    }

    /// Returns a copy of the post with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PostNotFound`] if no post has that id.
    pub async fn get(&self, id: PostId) -> Result<TextPost, ApiError> {
        let inner = self.inner.read().await;
        inner
            .posts
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::PostNotFound(id.to_string()))
    }

    /// Returns posts in insertion order, truncated to `limit` when given.
    pub async fn list(&self, limit: Option<usize>) -> Vec<TextPost> {
        let inner = self.inner.read().await;
        let take = limit.unwrap_or(usize::MAX);
        inner.posts.values().take(take).cloned().collect()
    }

    /// Returns the number of stored posts.
    pub async fn len(&self) -> usize {
        self.inner.read().await.posts.len()
    }

    /// Returns `true` if the store holds no posts.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.posts.is_empty()
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::text_post::seed_posts;

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = PostStore::new();
        assert!(store.is_empty().await);

        let post = store.insert(NewTextPost::new("t", "c")).await;
        assert_eq!(post.id, PostId::FIRST);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn seeded_store_continues_after_highest_id() {
        let store = PostStore::with_posts(seed_posts());
        assert_eq!(store.len().await, 10);

        let post = store.insert(NewTextPost::new("Eleventh", "more")).await;
        assert_eq!(post.id, PostId::new(11));

        let Ok(fetched) = store.get(PostId::new(11)).await else {
            panic!("new post should be retrievable");
        };
        assert_eq!(fetched, post);
    }

    #[tokio::test]
    async fn get_missing_returns_not_found() {
        let store = PostStore::with_posts(seed_posts());
        let result = store.get(PostId::new(999)).await;
        assert!(matches!(result, Err(ApiError::PostNotFound(id)) if id == "999"));
    }

    #[tokio::test]
    async fn list_limit_keeps_insertion_order() {
        let store = PostStore::with_posts(seed_posts());
        let first_three = store.list(Some(3)).await;
        let ids: Vec<u64> = first_three.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            first_three.first().map(|p| p.title.as_str()),
            Some("First Post")
        );
    }

    #[tokio::test]
    async fn list_without_limit_returns_everything() {
        let store = PostStore::with_posts(seed_posts());
        assert_eq!(store.list(None).await.len(), 10);
        assert_eq!(store.list(Some(50)).await.len(), 10);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(PostStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .insert(NewTextPost::new(format!("t{i}"), "c"))
                    .await
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            let Ok(id) = handle.await else {
                panic!("insert task panicked");
            };
            ids.push(id.get());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        assert_eq!(store.len().await, 32);
    }
}
