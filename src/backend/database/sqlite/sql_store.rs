use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::backend::database::customer_update::{ColumnValue, CustomerUpdateProcessor, Placeholder};
use crate::backend::database::{map_database_error, CUSTOMER_TABLE};
use crate::backend::CustomerStore;
use crate::error::{AppError, AppResult};
use crate::models::{Customer, CustomerUpdate};

/// SQLite store issuing hand-written SQL
pub struct SqliteSqlStore {
    pool: SqlitePool,
}

impl SqliteSqlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map a `SELECT id, name, email, age` row by column name
fn map_customer_row(row: &SqliteRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer {
        id: Some(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        age: row.try_get("age")?,
    })
}

#[async_trait]
impl CustomerStore for SqliteSqlStore {
    async fn select_all(&self) -> AppResult<Vec<Customer>> {
        let sql = format!("SELECT id, name, email, age FROM {} ORDER BY id", CUSTOMER_TABLE);

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to list customers: {}", e)))?;

        rows.iter()
            .map(map_customer_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Database(format!("Failed to map customer row: {}", e)))
    }

    async fn select_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        let sql = format!(
            "SELECT id, name, email, age FROM {} WHERE id = ?1",
            CUSTOMER_TABLE
        );

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to find customer: {}", e)))?;

        row.as_ref()
            .map(map_customer_row)
            .transpose()
            .map_err(|e| AppError::Database(format!("Failed to map customer row: {}", e)))
    }

    async fn exists_with_email(&self, email: &str) -> AppResult<bool> {
        let sql = format!("SELECT COUNT(id) FROM {} WHERE email = ?1", CUSTOMER_TABLE);

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check email: {}", e)))?;

        Ok(count > 0)
    }

    async fn insert(&self, customer: &Customer) -> AppResult<Customer> {
        let sql = format!(
            "INSERT INTO {} (name, email, age) VALUES (?1, ?2, ?3)",
            CUSTOMER_TABLE
        );

        let result = sqlx::query(&sql)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(customer.age)
            .execute(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "insert customer"))?;

        tracing::debug!(rows = result.rows_affected(), "sqlite insert customer");
        Ok(customer.clone().with_id(result.last_insert_rowid()))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", CUSTOMER_TABLE);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "delete customer"))?;

        tracing::debug!(rows = result.rows_affected(), "sqlite delete customer");
        Ok(())
    }

    async fn update(&self, update: &CustomerUpdate) -> AppResult<()> {
        let statement = CustomerUpdateProcessor::build_update_statement(
            CUSTOMER_TABLE,
            update,
            Placeholder::Question,
        )?;

        let mut query = sqlx::query(&statement.sql);
        for value in statement.values {
            query = match value {
                ColumnValue::Text(text) => query.bind(text),
                ColumnValue::Integer(number) => query.bind(number),
            };
        }

        let result = query
            .bind(statement.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "update customer"))?;

        tracing::debug!(rows = result.rows_affected(), "sqlite update customer");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }
}
