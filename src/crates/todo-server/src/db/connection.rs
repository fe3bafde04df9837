//! Database connection management
//!
//! Provides SQLite connection pooling, embedded migrations, and health checks.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::db::error::DbResult;

/// Type alias for the database connection pool
pub type DatabasePool = SqlitePool;

/// Database connection wrapper
#[derive(Clone, Debug)]
pub struct DatabaseConnection {
    pool: Arc<DatabasePool>,
}

impl DatabaseConnection {
    /// Open a pool for `database_url` with up to 5 connections
    ///
    /// # Arguments
    /// * `database_url` - SQLite connection string (e.g., "sqlite://todos.db" or "sqlite::memory:")
    pub async fn new(database_url: &str) -> DbResult<Self> {
        Self::with_max_connections(database_url, 5).await
    }

    /// Open a pool with a custom size
    ///
    /// The database file is created if missing. In-memory databases are
    /// private to a single connection, so they always get a pool of one
    /// connection that is never recycled.
    pub async fn with_max_connections(database_url: &str, max_connections: u32) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let in_memory = database_url.contains(":memory:");

        let mut pool_options = SqlitePoolOptions::new();
        pool_options = if in_memory {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(max_connections.max(1))
        };

        debug!(url = %database_url, in_memory, "Connecting to database");
        let pool = pool_options.connect_with(options).await?;
        info!(url = %database_url, "Database connection established");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Create or upgrade the schema
    pub async fn run_migrations(&self) -> DbResult<()> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Perform a health check by running a simple query
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").fetch_one(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Close the connection pool gracefully
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
