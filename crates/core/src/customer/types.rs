use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Row id, assigned on creation.
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Customer data before persistence; carries no id yet.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Full replacement payload for updates. It carries its own id so the
/// resolver can cross-check it against the path id.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerUpdate {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Errors for customer operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("no customer found with id {0}")]
    NotFound(i64),

    #[error("a customer already exists with the email address {0}")]
    EmailTaken(String),

    #[error("customer {0} still owns reviews and cannot be deleted")]
    HasReviews(i64),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("database error: {0}")]
    Database(String),
}
