//! Request payload validation
//!
//! Runs before any store call so that malformed input never reaches the
//! duplicate-email checks or the database.

use email_address::EmailAddress;

use crate::error::{AppError, AppResult};
use crate::models::{CustomerRegistrationRequest, CustomerUpdateRequest};

pub fn validate_registration(request: &CustomerRegistrationRequest) -> AppResult<()> {
    validate_name(&request.name)?;
    validate_email(&request.email)?;
    if let Some(age) = request.age {
        validate_age(age)?;
    }
    Ok(())
}

pub fn validate_update(request: &CustomerUpdateRequest) -> AppResult<()> {
    if let Some(ref name) = request.name {
        validate_name(name)?;
    }
    if let Some(ref email) = request.email {
        validate_email(email)?;
    }
    if let Some(age) = request.age {
        validate_age(age)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be blank".to_string()));
    }
    Ok(())
}

fn validate_email(email: &str) -> AppResult<()> {
    if !EmailAddress::is_valid(email) {
        return Err(AppError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )));
    }
    Ok(())
}

fn validate_age(age: i32) -> AppResult<()> {
    if age < 0 {
        return Err(AppError::Validation("age must not be negative".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, email: &str, age: Option<i32>) -> CustomerRegistrationRequest {
        CustomerRegistrationRequest {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(validate_registration(&registration("Alex", "alex@gmail.com", Some(22))).is_ok());
        assert!(validate_registration(&registration("Jamila", "jamila@gmail.com", None)).is_ok());
    }

    #[test]
    fn test_invalid_registration() {
        assert!(validate_registration(&registration("  ", "alex@gmail.com", None)).is_err());
        assert!(validate_registration(&registration("Alex", "not-an-email", None)).is_err());
        assert!(matches!(
            validate_registration(&registration("Alex", "alex@gmail.com", Some(-1))),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_update_checks_present_fields_only() {
        assert!(validate_update(&CustomerUpdateRequest::default()).is_ok());

        let blank_name = CustomerUpdateRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_update(&blank_name).is_err());

        let bad_email = CustomerUpdateRequest {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&bad_email).is_err());
    }
}
