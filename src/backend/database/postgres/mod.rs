use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use super::config::DatabaseBackendConfig;
use crate::error::{AppError, AppResult};

pub mod repository_impl;
pub mod schema;
pub mod sql_store;

pub use repository_impl::PostgresCustomerRepository;
pub use sql_store::PostgresSqlStore;

/// Open a PostgreSQL pool and make sure the customer table exists
pub async fn connect(config: &DatabaseBackendConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect(&config.connection_url)
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

    schema::init_schema(&pool).await?;
    Ok(pool)
}
