//! Relational customer stores
//!
//! Two data-access strategies share one `customer` table layout:
//!
//! ```text
//! Shared logic
//!     ├── customer_update.rs (partial UPDATE generation, direct SQL strategy)
//!     └── repository.rs      (entity load/apply/save, repository strategy)
//!         ↓
//! Database-specific implementations
//!     ├── postgres/
//!     └── sqlite/
//! ```

pub mod config;
pub mod customer_update;
pub mod postgres;
pub mod repository;
pub mod sqlite;

pub use config::DatabaseBackendConfig;
pub use customer_update::{ColumnValue, CustomerUpdateProcessor, Placeholder, UpdateStatement};
pub use repository::{CustomerEntity, CustomerRepository, RepositoryCustomerStore};

use crate::error::AppError;

/// Name of the table holding customer records
pub const CUSTOMER_TABLE: &str = "customer";

/// Map a driver error to an AppError
///
/// A unique violation can only come from the email column, so it becomes a
/// duplicate-email error. Everything else is reported as a database failure.
pub fn map_database_error(error: sqlx::Error, action: &str) -> AppError {
    if let sqlx::Error::Database(ref db_error) = error {
        if db_error.is_unique_violation() {
            return AppError::DuplicateEmail("Email already taken".to_string());
        }
    }
    AppError::Database(format!("Failed to {}: {}", action, error))
}
