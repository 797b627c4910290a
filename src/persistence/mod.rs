//! Persistence layer: SQLite storage for media posts.
//!
//! Media posts live in a single `posts` table accessed through
//! `sqlx::SqlitePool`. The table is created at startup if missing; there
//! are no further migrations.

pub mod models;
pub mod sqlite;

pub use models::{MediaPost, NewMediaPost};
pub use sqlite::SqlitePersistence;
