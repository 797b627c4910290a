//! Domain layer: post identity, text post records and the in-memory store.

pub mod post_id;
pub mod post_store;
pub mod text_post;

pub use post_id::{InvalidPostId, MediaPostId, PostId};
pub use post_store::PostStore;
pub use text_post::{NewTextPost, TextPost};
