//! Type-safe post identifiers.
//!
//! [`PostId`] keys the in-memory text post store and is assigned
//! sequentially. [`MediaPostId`] wraps a UUID v4 generated by the server
//! when a media post is persisted. Keeping them distinct means a text post
//! id can never be used to look up a media post.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sequential identifier of an in-memory text post.
///
/// Ids start at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// The id assigned to the first post of an empty store.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A URL segment that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot parse `{0}` to an integer")]
pub struct InvalidPostId(pub String);

impl PostId {
    /// Reads a post id from a URL path segment.
    ///
    /// Returns `Ok(None)` for an integer that no post can have (negative or
    /// beyond `u64::MAX`), so lookups can answer "not found" for it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPostId`] if the segment is not an optionally signed
    /// run of ASCII digits.
    pub fn from_path_segment(raw: &str) -> Result<Option<Self>, InvalidPostId> {
        let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidPostId(raw.to_string()));
        }
        Ok(raw.parse::<u64>().ok().map(Self))
    }
}

/// Unique identifier of a persisted media post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaPostId(uuid::Uuid);

impl MediaPostId {
    /// Creates a new random `MediaPostId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for MediaPostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MediaPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MediaPostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}
