use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::backend::{CustomerStore, StoreFactory, StoreType};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::logging::logging_middleware;
use crate::resource;
use crate::service::CustomerService;

/// Create the store selected by `store.type`
pub async fn create_store(config: &AppConfig) -> AppResult<Arc<dyn CustomerStore>> {
    match config.store_type()? {
        StoreType::List => {
            tracing::info!(seed = ?config.store.seed, "Using in-memory list store");
            Ok(StoreFactory::memory(config.store.seed))
        }
        store_type => {
            let backend_config = config.database_backend_config()?;
            tracing::info!(
                store = ?store_type,
                database = ?backend_config.database_type,
                "Connecting relational store"
            );
            StoreFactory::relational(store_type, &backend_config).await
        }
    }
}

/// Routes for the customer resource under `base_path`, plus `/ping`
pub fn build_router(service: CustomerService, base_path: &str) -> Router {
    let base_path = base_path.trim_end_matches('/');

    Router::new()
        .route(
            &format!("{}/customers", base_path),
            get(resource::customer::get_customers).post(resource::customer::register_customer),
        )
        .route(
            &format!("{}/customers/{{id}}", base_path),
            get(resource::customer::get_customer)
                .put(resource::customer::update_customer)
                .delete(resource::customer::delete_customer),
        )
        .route("/ping", get(resource::ping::ping))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(service)
}

/// Store, service and router for a loaded configuration
pub async fn build_app(config: &AppConfig) -> AppResult<Router> {
    let store = create_store(config).await?;
    let service = CustomerService::new(store);
    Ok(build_router(service, config.base_path()))
}
