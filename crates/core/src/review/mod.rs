//! Review ingestion and retrieval.
//!
//! Reviews are created through a single linear pipeline (validate,
//! resolve the customer, classify, persist) and are immutable after
//! creation except for deletion.

mod service;
mod sqlite;
mod types;

pub use service::ReviewIngestionService;
pub use sqlite::SqliteReviewStore;
pub use types::*;

use crate::classifier::Sentiment;
use crate::customer::Customer;

/// Trait for review persistence.
pub trait ReviewStore: Send + Sync {
    /// Persist a classified review owned by an already-resolved
    /// customer; returns the stored form with its assigned id.
    fn insert(
        &self,
        text: &str,
        sentiment: Sentiment,
        customer: &Customer,
    ) -> Result<Review, ReviewError>;

    /// All reviews, or only those carrying the given sentiment.
    fn find(&self, sentiment: Option<Sentiment>) -> Result<Vec<Review>, ReviewError>;

    /// Delete a review by id.
    fn delete(&self, id: i64) -> Result<(), ReviewError>;
}
