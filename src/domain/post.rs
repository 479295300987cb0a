//! Post domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

use super::User;

/// Post domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Owning user
    pub user_id: i32,
}

/// Data required to create a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    /// Requested owner; may name a user that does not exist
    pub user_id: i64,
}

impl NewPost {
    pub fn new(title: impl Into<String>, description: impl Into<String>, user_id: i64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            user_id,
        }
    }
}

/// Post returned to clients, with its owner embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PostResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hi")]
    pub title: String,
    #[schema(example = "First post")]
    pub description: String,
    pub user: User,
}

impl PostResponse {
    /// Pair a persisted post with its owner.
    ///
    /// The caller guarantees `user.id == post.user_id`.
    pub fn new(post: Post, user: User) -> Self {
        debug_assert_eq!(post.user_id, user.id);
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            user,
        }
    }
}
