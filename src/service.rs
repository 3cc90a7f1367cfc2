//! Customer service
//!
//! Validates requests, enforces email uniqueness and reconciles partial
//! updates against the stored record before anything is written through the
//! configured [`CustomerStore`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::CustomerStore;
use crate::error::{AppError, AppResult};
use crate::models::{Customer, CustomerRegistrationRequest, CustomerUpdate, CustomerUpdateRequest};
use crate::validation::{validate_registration, validate_update};

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_customers(&self) -> AppResult<Vec<Customer>> {
        self.store.select_all().await
    }

    pub async fn get_customer(&self, id: i64) -> AppResult<Customer> {
        self.store
            .select_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer with id [{}] not found!", id)))
    }

    pub async fn add_customer(&self, request: CustomerRegistrationRequest) -> AppResult<Customer> {
        validate_registration(&request)?;

        if self.store.exists_with_email(&request.email).await? {
            info!(email = %request.email, "registration rejected, email already taken");
            return Err(AppError::DuplicateEmail("Email already taken!".to_string()));
        }

        let customer = Customer::from(request);
        self.store
            .insert(&customer)
            .await
            .map_err(|e| wrap_store_error(e, "Failed to insert customer"))
    }

    pub async fn delete_customer(&self, id: i64) -> AppResult<()> {
        if self.store.select_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Customer with id [{}] not found",
                id
            )));
        }

        self.store
            .delete_by_id(id)
            .await
            .map_err(|e| wrap_store_error(e, "Could not delete customer"))
    }

    /// Apply the fields of `request` that differ from the stored customer
    ///
    /// Fields are compared in the order name, email, age. An email is only
    /// checked for uniqueness when it differs from the current one. When
    /// nothing differs the store is not touched.
    pub async fn update_customer(&self, id: i64, request: CustomerUpdateRequest) -> AppResult<()> {
        let current = self.get_customer(id).await?;
        validate_update(&request)?;

        let mut changes = CustomerUpdate::new(id);

        if let Some(name) = request.name {
            if name != current.name {
                changes.name = Some(name);
            }
        }

        if let Some(email) = request.email {
            if email != current.email {
                if self.store.exists_with_email(&email).await? {
                    info!(id, email = %email, "update rejected, email already taken");
                    return Err(AppError::DuplicateEmail("Email already taken".to_string()));
                }
                changes.email = Some(email);
            }
        }

        if let Some(age) = request.age {
            if current.age != Some(age) {
                changes.age = Some(age);
            }
        }

        if changes.is_empty() {
            return Err(AppError::NoChangesRequested(
                "No data changes found".to_string(),
            ));
        }

        self.store
            .update(&changes)
            .await
            .map_err(|e| wrap_store_error(e, "Could not update customer"))
    }
}

/// Wrap a store failure for the caller
///
/// A duplicate email reported by the database itself keeps its kind; any other
/// failure loses its original type and only its text survives.
fn wrap_store_error(error: AppError, context: &str) -> AppError {
    match error {
        AppError::DuplicateEmail(_) => error,
        other => {
            warn!("{}: {}", context, other);
            AppError::Persistence(format!("{}: {}", context, other))
        }
    }
}
