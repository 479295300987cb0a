//! Database connection and initialization.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::config::{Config, DB_CONNECT_TIMEOUT_SECS};

pub mod migrations;
mod retry;

pub use migrations::Migrator;
pub use retry::RetryPolicy;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect with the configured retry policy and synchronize the schema.
    ///
    /// Returns the last connection error once every attempt has failed.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url());
        options.connect_timeout(Duration::from_secs(DB_CONNECT_TIMEOUT_SECS));

        Self::connect_with(options, &config.retry_policy()).await
    }

    /// Connect using explicit options and retry policy, then synchronize the schema.
    pub async fn connect_with(options: ConnectOptions, retry: &RetryPolicy) -> Result<Self, DbErr> {
        let mut attempt = 1;
        let connection = loop {
            match SeaDatabase::connect(options.clone()).await {
                Ok(connection) => break connection,
                Err(e) if attempt < retry.max_attempts() => {
                    let delay = retry.delay_after(attempt);
                    tracing::warn!(
                        "Database connection attempt {}/{} failed: {}; retrying in {:?}",
                        attempt,
                        retry.max_attempts(),
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(
                        "Database connection failed after {} attempt(s): {}",
                        attempt,
                        e
                    );
                    return Err(e);
                }
            }
        };

        let database = Self::from_connection(connection);
        database.sync_schema().await?;
        tracing::info!("Database connected and schema synchronized");

        Ok(database)
    }

    /// Wrap an already established connection without touching the schema.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Create the entity tables if they do not exist yet.
    pub async fn sync_schema(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
