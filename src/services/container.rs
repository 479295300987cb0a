//! Service Container - Wires repositories into services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{PostManager, PostService, UserManager, UserService};
use crate::infra::{PostStore, UserStore};

/// All application services, shared behind `Arc`s
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserService>,
    pub posts: Arc<dyn PostService>,
}

impl Services {
    /// Create a container from already built services
    pub fn new(users: Arc<dyn UserService>, posts: Arc<dyn PostService>) -> Self {
        Self { users, posts }
    }

    /// Create the SeaORM-backed services over one connection pool
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let post_repo = Arc::new(PostStore::new(db));

        Self {
            users: Arc::new(UserManager::new(user_repo.clone())),
            posts: Arc::new(PostManager::new(user_repo, post_repo)),
        }
    }
}
