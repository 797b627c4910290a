//! SQLite implementation of the persistence layer.

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::models::{MediaPost, NewMediaPost};
use crate::config::ServerConfig;
use crate::domain::MediaPostId;
use crate::error::ApiError;

const CREATE_POSTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS posts (\
     id TEXT PRIMARY KEY NOT NULL, \
     caption TEXT NOT NULL DEFAULT '', \
     url TEXT NOT NULL, \
     file_type TEXT NOT NULL, \
     file_name TEXT NOT NULL, \
     created_at TEXT NOT NULL)";

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts (created_at)";

type PostRow = (String, String, String, String, String, DateTime<Utc>);

/// SQLite-backed media post storage using `sqlx::SqlitePool`.
///
/// Every call checks a connection out of the pool for its own duration.
#[derive(Debug, Clone)]
pub struct SqlitePersistence {
    pool: SqlitePool,
}

impl SqlitePersistence {
    /// Wraps an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `config.database_url`, creating the database file
    /// if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a [`ApiError::PersistenceError`] if the URL is invalid or the
    /// database cannot be opened.
    pub async fn connect(config: &ServerConfig) -> Result<Self, ApiError> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(url = %config.database_url, "database connected");
        Ok(Self::new(pool))
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `posts` table and its index if they are missing.
    ///
    /// # Errors
    ///
    /// Returns a [`ApiError::PersistenceError`] on database failure.
    pub async fn create_tables(&self) -> Result<(), ApiError> {
        sqlx::query(CREATE_POSTS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_CREATED_AT_INDEX)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Inserts a post stamped with `created_at` inside its own transaction
    /// and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns a [`ApiError::PersistenceError`] on database failure.
    pub async fn insert_post(
        &self,
        post: NewMediaPost,
        created_at: DateTime<Utc>,
    ) -> Result<MediaPost, ApiError> {
        let id = MediaPostId::new();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO posts (id, caption, url, file_type, file_name, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(id.to_string())
        .bind(&post.caption)
        .bind(&post.url)
        .bind(&post.file_type)
        .bind(&post.file_name)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(MediaPost {
            id,
            caption: post.caption,
            url: post.url,
            file_type: post.file_type,
            file_name: post.file_name,
            created_at,
        })
    }

    /// Loads every post, newest first. Equal timestamps resolve to the
    /// later insert first.
    ///
    /// # Errors
    ///
    /// Returns a [`ApiError::PersistenceError`] on database failure, or
    /// [`ApiError::Internal`] if a stored id is not a UUID.
    pub async fn list_newest_first(&self) -> Result<Vec<MediaPost>, ApiError> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, caption, url, file_type, file_name, created_at FROM posts \
             ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_post).collect()
    }

    /// Returns the number of stored posts.
    ///
    /// # Errors
    ///
    /// Returns a [`ApiError::PersistenceError`] on database failure.
    pub async fn count(&self) -> Result<i64, ApiError> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}

fn row_to_post(
    (id, caption, url, file_type, file_name, created_at): PostRow,
) -> Result<MediaPost, ApiError> {
    let id = id
        .parse::<MediaPostId>()
        .map_err(|e| ApiError::Internal(format!("stored post id {id:?} is not a uuid: {e}")))?;
    Ok(MediaPost {
        id,
        caption,
        url,
        file_type,
        file_name,
        created_at,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::persistence::models::{PHOTO_FILE_TYPE, PLACEHOLDER_URL};

    /// Single-connection in-memory database with the schema applied.
    pub(crate) async fn memory_store() -> SqlitePersistence {
        let Ok(pool) = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
        else {
            panic!("in-memory sqlite should open");
        };
        let store = SqlitePersistence::new(pool);
        let Ok(()) = store.create_tables().await else {
            panic!("schema creation failed");
        };
        store
    }

    fn at(secs: i64) -> DateTime<Utc> {
        let Some(ts) = Utc.timestamp_opt(1_700_000_000 + secs, 0).single() else {
            panic!("valid timestamp");
        };
        ts
    }

    #[tokio::test]
    async fn create_tables_is_idempotent() {
        let store = memory_store().await;
        assert!(store.create_tables().await.is_ok());
        assert!(matches!(store.count().await, Ok(0)));
    }

    #[tokio::test]
    async fn insert_returns_stored_row() {
        let store = memory_store().await;
        let Ok(post) = store
            .insert_post(NewMediaPost::placeholder("hello"), at(0))
            .await
        else {
            panic!("insert failed");
        };
        assert_eq!(post.caption, "hello");
        assert_eq!(post.file_type, PHOTO_FILE_TYPE);
        assert_eq!(post.url, PLACEHOLDER_URL);
        assert_eq!(post.created_at, at(0));

        let Ok(rows) = store.list_newest_first().await else {
            panic!("list failed");
        };
        assert_eq!(rows, vec![post]);
    }

    #[tokio::test]
    async fn list_orders_by_created_at_descending() {
        let store = memory_store().await;
        let Ok(older) = store
            .insert_post(NewMediaPost::placeholder("t1"), at(1))
            .await
        else {
            panic!("insert failed");
        };
        let Ok(newer) = store
            .insert_post(NewMediaPost::placeholder("t2"), at(2))
            .await
        else {
            panic!("insert failed");
        };
        // Inserted out of order on purpose.
        let Ok(oldest) = store
            .insert_post(NewMediaPost::placeholder("t0"), at(0))
            .await
        else {
            panic!("insert failed");
        };

        let Ok(rows) = store.list_newest_first().await else {
            panic!("list failed");
        };
        let ids: Vec<MediaPostId> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![newer.id, older.id, oldest.id]);
    }

    #[tokio::test]
    async fn equal_timestamps_list_latest_insert_first() {
        let store = memory_store().await;
        let Ok(a) = store.insert_post(NewMediaPost::placeholder("a"), at(5)).await else {
            panic!("insert failed");
        };
        let Ok(b) = store.insert_post(NewMediaPost::placeholder("b"), at(5)).await else {
            panic!("insert failed");
        };

        let Ok(rows) = store.list_newest_first().await else {
            panic!("list failed");
        };
        let ids: Vec<MediaPostId> = rows.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn corrupt_id_surfaces_as_internal_error() {
        let store = memory_store().await;
        let inserted = sqlx::query(
            "INSERT INTO posts (id, url, file_type, file_name, created_at) \
             VALUES ('bogus', 'u', 'photo', 'n', ?1)",
        )
        .bind(at(0))
        .execute(store.pool())
        .await;
        assert!(inserted.is_ok());

        assert!(matches!(
            store.list_newest_first().await,
            Err(ApiError::Internal(_))
        ));
    }
}
