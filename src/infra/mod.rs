//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and schema synchronization
//! - Repositories over the SeaORM entities

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator, RetryPolicy};
pub use repositories::{PostRepository, PostStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockPostRepository, MockUserRepository};
