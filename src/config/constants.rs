//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Database port (not configurable)
pub const DB_PORT: u16 = 3306;

/// Default database user
pub const DEFAULT_DB_USER: &str = "root";

/// Default database password (for development)
pub const DEFAULT_DB_PASSWORD: &str = "password";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "test_db";

// =============================================================================
// Startup readiness
// =============================================================================

/// Connection attempts before startup gives up
pub const DEFAULT_DB_CONNECT_MAX_ATTEMPTS: u32 = 10;

/// Delay before the first reconnect, doubled on every failure
pub const DEFAULT_DB_CONNECT_BACKOFF_MS: u64 = 500;

/// Upper bound for a single backoff delay
pub const MAX_DB_CONNECT_BACKOFF_MS: u64 = 10_000;

/// Timeout for one connection attempt
pub const DB_CONNECT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// Response messages
// =============================================================================

/// Entity label used in user persistence errors
pub const ENTITY_USER: &str = "user";

/// Entity label used in post persistence errors
pub const ENTITY_POST: &str = "post";
