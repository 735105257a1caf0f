//! The review ingestion pipeline.
//!
//! A single linear flow: validate the submission, resolve the
//! submitting customer, classify the text, persist. Validation happens
//! before any collaborator is called, and a classifier failure aborts
//! the whole operation so no review is ever stored with a guessed
//! sentiment.

use std::sync::Arc;

use tracing::debug;

use super::{Review, ReviewError, ReviewStore, ReviewSubmission};
use crate::classifier::{Sentiment, SentimentClassifier};
use crate::customer::{CustomerResolver, NewCustomer};

pub struct ReviewIngestionService {
    store: Arc<dyn ReviewStore>,
    customers: CustomerResolver,
    classifier: Arc<dyn SentimentClassifier>,
}

impl ReviewIngestionService {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        customers: CustomerResolver,
        classifier: Arc<dyn SentimentClassifier>,
    ) -> Self {
        Self {
            store,
            customers,
            classifier,
        }
    }

    /// Ingest a review submission.
    ///
    /// Customer resolution is id-strict: a submission carrying a
    /// customer id requires that customer to exist, while a submission
    /// carrying only an email upserts by email.
    pub async fn create_review(&self, submission: ReviewSubmission) -> Result<Review, ReviewError> {
        let text = match submission.text {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                return Err(ReviewError::InvalidArgument(
                    "review text cannot be null or empty".into(),
                ))
            }
        };

        let attached = submission.customer.ok_or_else(|| {
            ReviewError::InvalidArgument("customer information is required".into())
        })?;

        let customer = match attached.id {
            Some(id) => self.customers.get_by_id(id)?,
            None => {
                let email = attached
                    .email
                    .filter(|e| !e.trim().is_empty())
                    .ok_or_else(|| {
                        ReviewError::InvalidArgument(
                            "an email is required to create a new review".into(),
                        )
                    })?;
                self.customers.find_or_create(NewCustomer {
                    email,
                    phone: attached.phone,
                })?
            }
        };

        let sentiment = self.classifier.classify(&text).await?;
        debug!(customer = customer.id, %sentiment, "classified review");

        self.store.insert(&text, sentiment, &customer)
    }

    /// All reviews, or only those carrying the given sentiment.
    pub fn find_reviews(&self, sentiment: Option<Sentiment>) -> Result<Vec<Review>, ReviewError> {
        self.store.find(sentiment)
    }

    pub fn delete_review(&self, id: i64) -> Result<(), ReviewError> {
        self.store.delete(id)
    }
}
