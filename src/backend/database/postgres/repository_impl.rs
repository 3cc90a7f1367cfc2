use async_trait::async_trait;
use sqlx::PgPool;

use crate::backend::database::repository::{CustomerEntity, CustomerRepository};
use crate::backend::database::{map_database_error, CUSTOMER_TABLE};
use crate::error::{AppError, AppResult};
use crate::models::Customer;

/// PostgreSQL-specific implementation of CustomerRepository
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_all(&self) -> AppResult<Vec<CustomerEntity>> {
        let sql = format!("SELECT * FROM {} ORDER BY id", CUSTOMER_TABLE);
        sqlx::query_as::<_, CustomerEntity>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to load customers: {}", e)))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<CustomerEntity>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", CUSTOMER_TABLE);
        sqlx::query_as::<_, CustomerEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to load customer: {}", e)))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE email = $1)",
            CUSTOMER_TABLE
        );
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to check email: {}", e)))
    }

    async fn save(&self, customer: &Customer) -> AppResult<CustomerEntity> {
        match customer.id {
            None => {
                let sql = format!(
                    "INSERT INTO {} (name, email, age) VALUES ($1, $2, $3) RETURNING *",
                    CUSTOMER_TABLE
                );
                sqlx::query_as::<_, CustomerEntity>(&sql)
                    .bind(&customer.name)
                    .bind(&customer.email)
                    .bind(customer.age)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| map_database_error(e, "save customer"))
            }
            Some(id) => {
                let sql = format!(
                    "UPDATE {} SET name = $1, email = $2, age = $3 WHERE id = $4 RETURNING *",
                    CUSTOMER_TABLE
                );
                sqlx::query_as::<_, CustomerEntity>(&sql)
                    .bind(&customer.name)
                    .bind(&customer.email)
                    .bind(customer.age)
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| map_database_error(e, "save customer"))
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", CUSTOMER_TABLE);
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_database_error(e, "delete customer"))?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }
}
