//! Entity repository strategy
//!
//! Database-specific repositories only know how to load and save whole
//! [`CustomerEntity`] rows. [`RepositoryCustomerStore`] turns that into the
//! [`CustomerStore`] contract: an update loads the entity, applies the changed
//! columns and saves the full row back.

use async_trait::async_trait;

use crate::backend::CustomerStore;
use crate::error::AppResult;
use crate::models::{Customer, CustomerUpdate};

/// One row of the `customer` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CustomerEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<CustomerEntity> for Customer {
    fn from(entity: CustomerEntity) -> Self {
        Customer {
            id: Some(entity.id),
            name: entity.name,
            email: entity.email,
            age: entity.age,
        }
    }
}

/// Database-specific adapter for entity persistence
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<CustomerEntity>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<CustomerEntity>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Insert when `customer.id` is `None`, otherwise overwrite every column
    async fn save(&self, customer: &Customer) -> AppResult<CustomerEntity>;

    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    async fn ping(&self) -> AppResult<()>;
}

/// [`CustomerStore`] backed by any [`CustomerRepository`]
pub struct RepositoryCustomerStore<R: CustomerRepository> {
    repository: R,
}

impl<R: CustomerRepository> RepositoryCustomerStore<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CustomerRepository> CustomerStore for RepositoryCustomerStore<R> {
    async fn select_all(&self) -> AppResult<Vec<Customer>> {
        let entities = self.repository.find_all().await?;
        Ok(entities.into_iter().map(Customer::from).collect())
    }

    async fn select_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        Ok(self.repository.find_by_id(id).await?.map(Customer::from))
    }

    async fn exists_with_email(&self, email: &str) -> AppResult<bool> {
        self.repository.exists_by_email(email).await
    }

    async fn insert(&self, customer: &Customer) -> AppResult<Customer> {
        let mut new_customer = customer.clone();
        new_customer.id = None;
        Ok(self.repository.save(&new_customer).await?.into())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.repository.delete_by_id(id).await
    }

    async fn update(&self, update: &CustomerUpdate) -> AppResult<()> {
        let Some(entity) = self.repository.find_by_id(update.id).await? else {
            tracing::debug!(id = update.id, "update skipped, customer no longer exists");
            return Ok(());
        };

        let mut customer = Customer::from(entity);
        customer.apply(update);
        self.repository.save(&customer).await?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
