use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::extractors::{AppJson, AppPath};
use crate::models::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};
use crate::service::CustomerService;

// Helper function to construct the Location of a newly created customer
//
// Resolves against the Host header (and X-Forwarded-Proto when a proxy set
// it); falls back to a path-only location when there is no usable host.
fn build_customer_location(headers: &HeaderMap, uri: &Uri, id: i64) -> String {
    let path = format!("{}/{}", uri.path().trim_end_matches('/'), id);

    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("http");

    host.and_then(|host| url::Url::parse(&format!("{}://{}", scheme, host)).ok())
        .and_then(|base| base.join(&path).ok())
        .map(|url| url.to_string())
        .unwrap_or(path)
}

pub async fn get_customers(State(service): State<CustomerService>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(service.get_all_customers().await?))
}

pub async fn get_customer(
    State(service): State<CustomerService>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Customer>> {
    Ok(Json(service.get_customer(id).await?))
}

pub async fn register_customer(
    State(service): State<CustomerService>,
    headers: HeaderMap,
    uri: Uri,
    AppJson(request): AppJson<CustomerRegistrationRequest>,
) -> AppResult<Response> {
    let created = service.add_customer(request).await?;

    let id = created
        .id
        .ok_or_else(|| AppError::Persistence("Created customer missing ID".to_string()))?;

    let location = build_customer_location(&headers, &uri, id);
    let location = HeaderValue::from_str(&location)
        .map_err(|_| AppError::Persistence("Invalid location header".to_string()))?;

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update_customer(
    State(service): State<CustomerService>,
    AppPath(id): AppPath<i64>,
    AppJson(request): AppJson<CustomerUpdateRequest>,
) -> AppResult<StatusCode> {
    service.update_customer(id, request).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_customer(
    State(service): State<CustomerService>,
    AppPath(id): AppPath<i64>,
) -> AppResult<StatusCode> {
    service.delete_customer(id).await?;
    Ok(StatusCode::OK)
}
