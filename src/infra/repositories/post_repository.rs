//! Post repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};

use super::entities::post::ActiveModel;
use crate::domain::Post;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post owned by the existing user `user_id`
    async fn create(&self, title: String, description: String, user_id: i32) -> AppResult<Post>;
}

/// Concrete implementation of PostRepository
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn create(&self, title: String, description: String, user_id: i32) -> AppResult<Post> {
        let active_model = ActiveModel {
            id: NotSet,
            title: Set(title),
            description: Set(description),
            user_id: Set(user_id),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Post::from(model))
    }
}
