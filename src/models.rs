use serde::{Deserialize, Serialize};

/// A stored customer record.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `age` is optional because one of the seeded datasets carries no ages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl Customer {
    /// Create a customer that has not been stored yet
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: Option<i32>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Apply the columns carried by an update, leaving the others untouched
    pub fn apply(&mut self, update: &CustomerUpdate) {
        if let Some(ref name) = update.name {
            self.name = name.clone();
        }
        if let Some(ref email) = update.email {
            self.email = email.clone();
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
    }
}

impl From<CustomerRegistrationRequest> for Customer {
    fn from(request: CustomerRegistrationRequest) -> Self {
        Customer::new(request.name, request.email, request.age)
    }
}

/// Payload of `POST /customers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRegistrationRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

/// Payload of `PUT /customers/{id}`
///
/// A missing field means "leave unchanged"; it never clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

/// The columns of one customer that actually changed.
///
/// Produced by the service after reconciliation and handed to
/// [`crate::backend::CustomerStore::update`]. Every store writes exactly the
/// fields that are `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl CustomerUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            email: None,
            age: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}
