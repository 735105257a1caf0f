//! Identity resolution on top of the customer store.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::debug;

use super::{Customer, CustomerError, CustomerStore, CustomerUpdate, NewCustomer};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Resolves customer identity by id or email, creating records on first
/// contact. Idempotent by email: two submissions for the same address
/// resolve to the same customer.
#[derive(Clone)]
pub struct CustomerResolver {
    store: Arc<dyn CustomerStore>,
}

impl CustomerResolver {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    fn validate_email(email: &str) -> Result<(), CustomerError> {
        if !EMAIL_RE.is_match(email) {
            return Err(CustomerError::InvalidArgument(format!(
                "invalid email address: {}",
                email
            )));
        }
        Ok(())
    }

    /// Explicit customer creation; the email must not be in use.
    pub fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError> {
        Self::validate_email(&customer.email)?;

        if self.store.find_by_email(&customer.email)?.is_some() {
            return Err(CustomerError::EmailTaken(customer.email));
        }

        self.store.insert(&customer)
    }

    /// Return the customer stored under the candidate's email, creating
    /// one if absent. An existing record wins; the candidate's other
    /// fields are discarded.
    pub fn find_or_create(&self, candidate: NewCustomer) -> Result<Customer, CustomerError> {
        if let Some(existing) = self.store.find_by_email(&candidate.email)? {
            return Ok(existing);
        }

        Self::validate_email(&candidate.email)?;

        match self.store.insert(&candidate) {
            Ok(created) => {
                debug!(id = created.id, "created customer on first contact");
                Ok(created)
            }
            // Lost the insert race for a brand-new email: the unique
            // index held, so the row is there now. Re-read it.
            Err(CustomerError::EmailTaken(email)) => self
                .store
                .find_by_email(&email)?
                .ok_or(CustomerError::EmailTaken(email)),
            Err(e) => Err(e),
        }
    }

    pub fn get_by_id(&self, id: i64) -> Result<Customer, CustomerError> {
        self.store.get(id)
    }

    pub fn list(&self) -> Result<Vec<Customer>, CustomerError> {
        self.store.list()
    }

    /// Replace an existing customer's email and phone. The update's
    /// embedded id, when present, must agree with the path id.
    pub fn update(&self, id: i64, update: CustomerUpdate) -> Result<Customer, CustomerError> {
        let current = self.store.get(id)?;

        if let Some(body_id) = update.id {
            if body_id != id {
                return Err(CustomerError::InvalidArgument(format!(
                    "customer id mismatch: path id = {}, request body id = {}",
                    id, body_id
                )));
            }
        }

        Self::validate_email(&update.email)?;

        // Keeping one's own email is fine; taking another customer's is not.
        if let Some(other) = self.store.find_by_email(&update.email)? {
            if other.id != id {
                return Err(CustomerError::EmailTaken(update.email));
            }
        }

        self.store.update(&Customer {
            id,
            email: update.email,
            phone: update.phone,
            created_at: current.created_at,
        })
    }

    /// Delete a customer. Restricted while the customer still owns
    /// reviews.
    pub fn delete(&self, id: i64) -> Result<(), CustomerError> {
        if self.store.review_count(id)? > 0 {
            return Err(CustomerError::HasReviews(id));
        }
        self.store.delete(id)
    }
}
