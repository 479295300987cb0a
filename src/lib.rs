//! User/Post API - a small REST service over SeaORM
//!
//! Two endpoints create users and the posts they own:
//!
//! - `POST /users` validates and stores a user
//! - `POST /posts` checks the referenced user exists, then stores the post
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User and post types
//! - **services**: Use cases over repository traits
//! - **infra**: Database connection, schema and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (waits for the database first)
//! cargo run -- serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewPost, NewUser, Post, PostResponse, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
