//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::Services;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User and post services
    pub services: Services,
    /// Database connection, used for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state backed by the SeaORM stores.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self { services, database }
    }

    /// Create application state with manually injected services.
    pub fn new(services: Services, database: Arc<Database>) -> Self {
        Self { services, database }
    }
}
