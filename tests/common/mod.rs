#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use customer_service::backend::database::DatabaseBackendConfig;
use customer_service::backend::memory::SeedData;
use customer_service::backend::{CustomerStore, StoreFactory, StoreType};
use customer_service::service::CustomerService;
use customer_service::startup::build_router;
use serde_json::{json, Value};
use std::sync::Arc;

pub const CUSTOMERS: &str = "/customers";

/// Every store strategy the service can run on
pub const ALL_STORES: [StoreType; 3] = [StoreType::List, StoreType::Jdbc, StoreType::Jpa];

/// Create a store for testing
///
/// The list store starts from `seed`; relational stores run against a private
/// in-memory SQLite database and start empty.
pub async fn setup_test_store(
    store_type: StoreType,
    seed: SeedData,
) -> Result<Arc<dyn CustomerStore>, Box<dyn std::error::Error>> {
    match store_type {
        StoreType::List => Ok(StoreFactory::memory(seed)),
        relational => {
            let store =
                StoreFactory::relational(relational, &DatabaseBackendConfig::memory_sqlite()).await?;
            for customer in seed.customers() {
                store.insert(&customer).await?;
            }
            Ok(store)
        }
    }
}

/// Create a test app with the given store strategy and seed data
pub async fn setup_test_app(
    store_type: StoreType,
    seed: SeedData,
) -> Result<Router, Box<dyn std::error::Error>> {
    let store = setup_test_store(store_type, seed).await?;
    Ok(build_router(CustomerService::new(store), ""))
}

pub async fn setup_test_server(store_type: StoreType, seed: SeedData) -> TestServer {
    let app = setup_test_app(store_type, seed).await.unwrap();
    TestServer::new(app).unwrap()
}

pub fn customer_json(name: &str, email: &str, age: Option<i32>) -> Value {
    match age {
        Some(age) => json!({ "name": name, "email": email, "age": age }),
        None => json!({ "name": name, "email": email }),
    }
}

pub fn customer_path(id: i64) -> String {
    format!("{}/{}", CUSTOMERS, id)
}

/// Fetch the full customer list as JSON values
pub async fn list_customers(server: &TestServer) -> Vec<Value> {
    let response = server.get(CUSTOMERS).await;
    response.assert_status_ok();
    response.json()
}

/// Id at the end of a Location header
pub fn id_from_location(location: &str) -> i64 {
    location
        .rsplit('/')
        .next()
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("Location without a numeric id: {}", location))
}
