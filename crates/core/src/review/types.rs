use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::{ClassifierError, Sentiment};
use crate::customer::{Customer, CustomerError};

/// A persisted review with its owning customer and computed sentiment.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    /// Row id, assigned on creation.
    pub id: i64,
    pub text: String,
    /// Computed once at creation, never re-evaluated.
    #[serde(rename = "type")]
    pub sentiment: Sentiment,
    pub customer: Customer,
    pub created_at: DateTime<Utc>,
}

/// An inbound review submission, before validation.
///
/// Both fields are optional at the wire level so their absence maps to
/// an argument error rather than an unparseable body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewSubmission {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub customer: Option<CustomerRef>,
}

/// Customer information attached to a submission: either the id of an
/// existing customer, or the email (and optional phone) of a
/// possibly-new one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Errors for review operations.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("no review found with id {0}")]
    NotFound(i64),

    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error("database error: {0}")]
    Database(String),
}
