//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! The schema is created from these definitions at startup.

pub mod post;
pub mod user;

pub use post::Entity as PostEntity;
pub use user::Entity as UserEntity;
