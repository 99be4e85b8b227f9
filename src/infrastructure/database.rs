//! PostgreSQL connection pool lifecycle.
//!
//! The pool is created once at startup, shared by every request through
//! [`crate::state::AppState`], and closed after the HTTP server has drained.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::{Config, mask_connection_string};

/// Owner of the process-wide connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: Arc<PgPool>,
}

impl Database {
    /// Opens a pool using the connection settings from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial connection cannot be established.
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        tracing::info!(
            url = %mask_connection_string(&config.database_url),
            max_connections = config.db_max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await?;

        tracing::info!("Connected to database");
        Ok(Self::from_pool(pool))
    }

    /// Wraps an existing pool, e.g. one handed out by `#[sqlx::test]`.
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a shared handle to the underlying pool.
    pub fn pool(&self) -> Arc<PgPool> {
        self.pool.clone()
    }

    /// Closes all connections and waits for checked-out ones to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
