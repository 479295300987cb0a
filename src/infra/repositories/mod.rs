//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! one handle per entity.

pub mod entities;
mod post_repository;
mod user_repository;

pub use post_repository::{PostRepository, PostStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use post_repository::MockPostRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
