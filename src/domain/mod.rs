//! Domain layer - Core business entities
//!
//! Plain data types for users and posts, independent of the
//! database entities in [`crate::infra::repositories::entities`].

pub mod post;
pub mod user;

pub use post::{NewPost, Post, PostResponse};
pub use user::{NewUser, User};
