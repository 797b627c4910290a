//! # postboard
//!
//! Minimal blog/feed HTTP backend.
//!
//! Two kinds of posts are served side by side: title/content text posts kept
//! in an in-memory store, and media posts persisted to a single SQLite table.
//! Uploads record placeholder media metadata only; file bytes are discarded.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PostService ── PostStore (domain/, in memory)
//!     │
//!     └── FeedService ── SqlitePersistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
