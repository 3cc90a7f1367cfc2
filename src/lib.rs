pub mod backend;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod models;
pub mod resource;
pub mod service;
pub mod startup;
pub mod validation;

// Re-export commonly used types for easier access
pub use backend::{CustomerStore, StoreType};
pub use error::{AppError, AppResult};
pub use models::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};
pub use service::CustomerService;
