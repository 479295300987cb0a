//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ENTITY_USER;
use crate::domain::{NewUser, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Persist a new user. Emails are not deduplicated.
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        let user = self
            .repo
            .create(new_user)
            .await
            .map_err(|e| e.saving(ENTITY_USER))?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }
}
