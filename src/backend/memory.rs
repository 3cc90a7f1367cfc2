use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::CustomerStore;
use crate::error::AppResult;
use crate::models::{Customer, CustomerUpdate};

/// Which records the list store starts with
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedData {
    /// Alex (22) and Jamila (25)
    #[default]
    WithAge,
    /// Alex and Jamila without ages
    WithoutAge,
    None,
}

impl SeedData {
    pub fn customers(self) -> Vec<Customer> {
        let (alex_age, jamila_age) = match self {
            SeedData::WithAge => (Some(22), Some(25)),
            SeedData::WithoutAge => (None, None),
            SeedData::None => return Vec::new(),
        };
        vec![
            Customer::new("Alex", "alex@gmail.com", alex_age).with_id(1),
            Customer::new("Jamila", "jamila@gmail.com", jamila_age).with_id(2),
        ]
    }
}

/// List-backed store whose contents live as long as the instance
///
/// The lock only makes single operations atomic. A check followed by a write
/// (for example `exists_with_email` then `insert`) can still interleave with
/// another request.
pub struct InMemoryCustomerStore {
    state: RwLock<ListState>,
}

struct ListState {
    customers: Vec<Customer>,
    /// Highest id ever handed out; never decreases, so deleted ids are not reused
    last_id: i64,
}

impl InMemoryCustomerStore {
    pub fn new(customers: Vec<Customer>) -> Self {
        let last_id = customers.iter().filter_map(|c| c.id).max().unwrap_or(0);
        Self {
            state: RwLock::new(ListState { customers, last_id }),
        }
    }

    pub fn seeded(seed: SeedData) -> Self {
        Self::new(seed.customers())
    }
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn select_all(&self) -> AppResult<Vec<Customer>> {
        Ok(self.state.read().await.customers.clone())
    }

    async fn select_by_id(&self, id: i64) -> AppResult<Option<Customer>> {
        let state = self.state.read().await;
        Ok(state.customers.iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn exists_with_email(&self, email: &str) -> AppResult<bool> {
        let state = self.state.read().await;
        Ok(state.customers.iter().any(|c| c.email == email))
    }

    async fn insert(&self, customer: &Customer) -> AppResult<Customer> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let stored = customer.clone().with_id(state.last_id);
        state.customers.push(stored.clone());
        tracing::debug!(id = ?stored.id, "inserted customer into list store");
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.write().await;
        if let Some(position) = state.customers.iter().position(|c| c.id == Some(id)) {
            state.customers.remove(position);
        }
        Ok(())
    }

    async fn update(&self, update: &CustomerUpdate) -> AppResult<()> {
        let mut state = self.state.write().await;
        if let Some(customer) = state.customers.iter_mut().find(|c| c.id == Some(update.id)) {
            customer.apply(update);
        }
        Ok(())
    }
}
