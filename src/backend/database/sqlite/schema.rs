use crate::backend::database::CUSTOMER_TABLE;
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Create the customer table for SQLite if it does not exist yet
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
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

/// Drop the customer table (for cleanup/testing)
#[cfg(test)]
pub async fn drop_schema(pool: &SqlitePool) -> AppResult<()> {
    let sql = format!("DROP TABLE IF EXISTS {}", CUSTOMER_TABLE);
    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to drop customer table: {}", e)))?;
    Ok(())
}
