use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    NotFound(String),
    DuplicateEmail(String),
    NoChangesRequested(String),
    /// A store failure after the service has wrapped it with context.
    Persistence(String),
    Validation(String),
    /// Request body or path that could not be extracted
    BadRequest(String),
    /// Raw failure reported by a store, before the service wraps it.
    Database(String),
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(e) => write!(f, "{}", e),
            AppError::DuplicateEmail(e) => write!(f, "{}", e),
            AppError::NoChangesRequested(e) => write!(f, "{}", e),
            AppError::Persistence(e) => write!(f, "{}", e),
            AppError::Validation(e) => write!(f, "Validation failed: {}", e),
            AppError::BadRequest(e) => write!(f, "Bad request: {}", e),
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}


pub type AppResult<T> = Result<T, AppError>;

/// Error body shared by every failing endpoint.
pub fn error_response(status_code: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        status_code,
        Json(json!({
            "status": status_code.as_u16(),
            "error": status_code.canonical_reason().unwrap_or("Unknown"),
            "message": message,
        })),
    )
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail(_) => StatusCode::CONFLICT,
            AppError::NoChangesRequested(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> (StatusCode, Json<serde_json::Value>) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        error_response(status, &self.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_response().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::DuplicateEmail("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NoChangesRequested("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Persistence("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_messages_are_not_prefixed() {
        let error = AppError::NotFound("Customer with id [7] not found!".to_string());
        assert_eq!(error.to_string(), "Customer with id [7] not found!");

        let (status, Json(body)) = error.to_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Customer with id [7] not found!");
    }
}
