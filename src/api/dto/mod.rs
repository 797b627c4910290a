//! Data Transfer Objects for REST request/response serialization.

pub mod media_dto;
pub mod post_dto;

pub use media_dto::*;
pub use post_dto::*;
