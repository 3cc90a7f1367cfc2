use crate::backend::database::CUSTOMER_TABLE;
use crate::error::{AppError, AppResult};
use sqlx::PgPool;

/// Create the customer table for PostgreSQL if it does not exist yet
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            age INTEGER
        )
        "#,
        CUSTOMER_TABLE
    );

    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create customer table: {}", e)))?;

    Ok(())
}
