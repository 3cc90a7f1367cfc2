use crate::error::{AppError, AppResult};
use crate::models::{Customer, CustomerUpdate};
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;
pub mod memory;

use database::DatabaseBackendConfig;
use memory::{InMemoryCustomerStore, SeedData};

/// Supported database backend types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

impl std::str::FromStr for DatabaseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" | "postgres" => Ok(DatabaseType::PostgreSQL),
            "sqlite" => Ok(DatabaseType::SQLite),
            _ => Err(AppError::Configuration(format!(
                "Unsupported database type: {}",
                s
            ))),
        }
    }
}

/// Data-access strategy, chosen by name in the configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreType {
    /// Process-lifetime list, seeded at startup
    List,
    /// Hand-written SQL against the `customer` table
    Jdbc,
    /// Entity repository over the `customer` table
    Jpa,
}

impl std::str::FromStr for StoreType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(StoreType::List),
            "jdbc" => Ok(StoreType::Jdbc),
            "jpa" => Ok(StoreType::Jpa),
            _ => Err(AppError::Configuration(format!(
                "Unsupported store type: {}",
                s
            ))),
        }
    }
}

/// Persistence abstraction for customer records
///
/// Every strategy (in-memory list, direct SQL, repository) implements this
/// trait and the service only ever talks to it through `Arc<dyn CustomerStore>`.
/// Lookups that find nothing return `Ok(None)` / `Ok(false)`, never an error.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All records; insertion order for the list store, backend order otherwise
    async fn select_all(&self) -> AppResult<Vec<Customer>>;

    async fn select_by_id(&self, id: i64) -> AppResult<Option<Customer>>;

    /// Exact, case-sensitive email match
    async fn exists_with_email(&self, email: &str) -> AppResult<bool>;

    /// Store a new customer and return it with its assigned id
    async fn insert(&self, customer: &Customer) -> AppResult<Customer>;

    /// Remove the record if present; deleting an unknown id is not an error
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Write the columns carried by `update`, leaving every other column as is
    async fn update(&self, update: &CustomerUpdate) -> AppResult<()>;

    /// Check if the underlying storage is reachable
    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Factory for creating store instances
pub struct StoreFactory;

impl StoreFactory {
    /// Create an in-memory store holding `seed`
    pub fn memory(seed: SeedData) -> Arc<dyn CustomerStore> {
        Arc::new(InMemoryCustomerStore::seeded(seed))
    }

    /// Create a relational store for `store_type`, bootstrapping its schema
    pub async fn relational(
        store_type: StoreType,
        config: &DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn CustomerStore>> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid database config: {}", e)))?;

        let store: Arc<dyn CustomerStore> = match (store_type, config.database_type) {
            (StoreType::Jdbc, DatabaseType::PostgreSQL) => {
                let pool = database::postgres::connect(config).await?;
                Arc::new(database::postgres::PostgresSqlStore::new(pool))
            }
            (StoreType::Jdbc, DatabaseType::SQLite) => {
                let pool = database::sqlite::connect(config).await?;
                Arc::new(database::sqlite::SqliteSqlStore::new(pool))
            }
            (StoreType::Jpa, DatabaseType::PostgreSQL) => {
                let pool = database::postgres::connect(config).await?;
                Arc::new(database::RepositoryCustomerStore::new(
                    database::postgres::PostgresCustomerRepository::new(pool),
                ))
            }
            (StoreType::Jpa, DatabaseType::SQLite) => {
                let pool = database::sqlite::connect(config).await?;
                Arc::new(database::RepositoryCustomerStore::new(
                    database::sqlite::SqliteCustomerRepository::new(pool),
                ))
            }
            (StoreType::List, _) => {
                return Err(AppError::Configuration(
                    "The list store is not backed by a database".to_string(),
                ))
            }
        };

        store.health_check().await?;
        Ok(store)
    }
}
