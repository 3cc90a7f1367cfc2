use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

use super::config::DatabaseBackendConfig;
use crate::error::{AppError, AppResult};

pub mod repository_impl;
pub mod schema;
pub mod sql_store;

pub use repository_impl::SqliteCustomerRepository;
pub use sql_store::SqliteSqlStore;

/// Open a SQLite pool and make sure the customer table exists
pub async fn connect(config: &DatabaseBackendConfig) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.connection_url)
        .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL: {}", e)))?
        .create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout));

    // Each connection to :memory: is its own database, and it disappears with
    // its last connection
    if config.is_memory_database() {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

    schema::init_schema(&pool).await?;
    Ok(pool)
}
