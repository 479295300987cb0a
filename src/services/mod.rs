//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits, so tests can swap in
//! mocks or fakes for the SeaORM stores.

pub mod container;
mod post_service;
mod user_service;

pub use container::Services;
pub use post_service::{PostManager, PostService};
pub use user_service::{UserManager, UserService};
