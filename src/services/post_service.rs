//! Post service - Creates posts for existing users.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ENTITY_POST;
use crate::domain::{NewPost, PostResponse};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{PostRepository, UserRepository};

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Persist a post after confirming its owner exists.
    ///
    /// Fails with `NotFound("User")` when `new_post.user_id` matches no user;
    /// nothing is written in that case.
    async fn create_post(&self, new_post: NewPost) -> AppResult<PostResponse>;
}

/// Concrete implementation of PostService.
pub struct PostManager {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl PostManager {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn create_post(&self, new_post: NewPost) -> AppResult<PostResponse> {
        let user = self
            .users
            .find_by_id(new_post.user_id)
            .await
            .map_err(|e| e.saving(ENTITY_POST))?
            .ok_or_not_found("User")?;

        let post = self
            .posts
            .create(new_post.title, new_post.description, user.id)
            .await
            .map_err(|e| e.saving(ENTITY_POST))?;

        tracing::info!(post_id = post.id, user_id = user.id, "Post created");
        Ok(PostResponse::new(post, user))
    }
}
