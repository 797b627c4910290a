//! Text post record held by the in-memory store.

use serde::Serialize;

use super::PostId;

/// A title/content pair with its assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPost {
    /// Sequential identifier (immutable after creation).
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// Input for a post that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTextPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

impl NewTextPost {
    /// Creates a new unsaved post.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

const SEED_ORDINALS: [(&str, &str); 10] = [
    ("First", "first"),
    ("Second", "second"),
    ("Third", "third"),
    ("Fourth", "fourth"),
    ("Fifth", "fifth"),
    ("Sixth", "sixth"),
    ("Seventh", "seventh"),
    ("Eighth", "eighth"),
    ("Ninth", "ninth"),
    ("Tenth", "tenth"),
];

/// The ten canned posts a fresh store starts with, in id order.
#[must_use]
pub fn seed_posts() -> Vec<NewTextPost> {
    SEED_ORDINALS
        .iter()
        .map(|(title, body)| {
            NewTextPost::new(format!("{title} Post"), format!("This is the {body} post."))
        })
        .collect()
}
